use std::io;
use std::process;

use clap::Parser;
use memfix_core::report::{ReportOptions, DEFAULT_SCANNER};
use memfix_core::types::ProcessId;
use memfix_core::{Harness, LineSignal, MemfixResult};
use memfix_utils::{error, info, init_logging_from, LogFormat, LogLevel};

/// Holds known typed values at stable addresses for validating memory scanners.
///
/// Prints every value and address, waits for Enter, changes every value,
/// prints again, and waits for Enter once more before exiting.
#[derive(Parser, Debug)]
#[command(name = "memfix")]
#[command(version)]
#[command(about = "Holds known typed values at stable addresses for validating memory scanners", long_about = None)]
struct Cli
{
    /// Log level for stderr output (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
    /// Log format: pretty or json (overrides MEMFIX_LOG_FORMAT)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,
    /// Leave scan hints and command suggestions out of the report
    #[arg(long, default_value_t = false)]
    no_hints: bool,
    /// Also print each value's little-endian byte pattern
    #[arg(long, default_value_t = false)]
    bytes: bool,
    /// Scanner executable to suggest `scan` commands for
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SCANNER)]
    scanner: String,
}

impl Cli
{
    fn report_options(&self) -> ReportOptions
    {
        ReportOptions {
            hints: !self.no_hints,
            byte_patterns: self.bytes,
            scanner: Some(self.scanner.clone()),
        }
    }
}

fn main()
{
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries only the report
    let logging = match init_logging_from(cli.log_level, cli.log_format) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        error!(error = %e, "harness failed");
        eprintln!("Error: {e}");
        drop(logging);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> MemfixResult<()>
{
    let process_id = ProcessId::current();
    info!(pid = %process_id, "starting memfix");

    let signal = LineSignal::new(io::stdin().lock());
    let harness = Harness::new(process_id, signal, io::stdout().lock(), cli.report_options());
    let transcript = harness.run()?;

    info!(
        cells = transcript.changes.len(),
        waits = transcript.waits,
        "all values changed, exiting"
    );
    Ok(())
}
