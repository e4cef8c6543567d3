//! # Reports
//!
//! Console output for the two phases. Wording is free-form; the facts are
//! fixed: the process id, every cell's kind, name, value, and address, and
//! the literal values worth searching for.

use std::io::{self, Write};

use crate::bank::CellSnapshot;
use crate::types::{Address, CellId, CellValue, ProcessId};

const RULE: &str = "============================================================";
const NAME_WIDTH: usize = 13;
const KIND_WIDTH: usize = 8;

/// Scanner used in command suggestions unless told otherwise
pub const DEFAULT_SCANNER: &str = "memscan-cli";

/// What goes into a report besides the required facts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions
{
    /// Print the values to search for, grouped by scanner type
    pub hints: bool,
    /// Print each initial value's little-endian byte pattern
    pub byte_patterns: bool,
    /// Scanner executable to suggest `scan` commands for
    pub scanner: Option<String>,
}

impl Default for ReportOptions
{
    fn default() -> Self
    {
        ReportOptions {
            hints: true,
            byte_patterns: false,
            scanner: Some(DEFAULT_SCANNER.to_string()),
        }
    }
}

/// One cell's transition from its initial to its changed value
#[derive(Debug, Clone, PartialEq)]
pub struct CellChange
{
    pub id: CellId,
    pub old: CellValue,
    pub new: CellValue,
    pub address: Address,
}

/// Write the initial report: banner, process id, values, addresses, hints
///
/// ## Errors
///
/// Returns any error from writing to `out`.
pub fn write_initial_report<W: Write + ?Sized>(
    out: &mut W,
    process_id: ProcessId,
    cells: &[CellSnapshot],
    options: &ReportOptions,
) -> io::Result<()>
{
    writeln!(out, "{RULE}")?;
    writeln!(out, "memfix - memory scanner test target")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Process ID: {process_id}")?;
    writeln!(out)?;

    writeln!(out, "Initial values:")?;
    for cell in cells {
        writeln!(
            out,
            "  {:<KIND_WIDTH$}  {:<NAME_WIDTH$} = {}",
            cell.id.kind().to_string(),
            cell.id.name(),
            cell.value
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Memory addresses:")?;
    for cell in cells {
        writeln!(out, "  {:<NAME_WIDTH$}  {}", cell.id.name(), cell.address)?;
    }
    writeln!(out)?;

    if options.hints {
        write_scan_hints(out, process_id, cells, options)?;
    }

    Ok(())
}

fn write_scan_hints<W: Write + ?Sized>(
    out: &mut W,
    process_id: ProcessId,
    cells: &[CellSnapshot],
    options: &ReportOptions,
) -> io::Result<()>
{
    let groups = group_by_scan_type(cells);

    writeln!(out, "Scan hints (search for these values):")?;
    for (scan_type, members) in &groups {
        let literals: Vec<String> = members.iter().map(|cell| cell.value.scan_literal()).collect();
        writeln!(out, "  {scan_type:<6}  {}", literals.join(", "))?;
    }
    writeln!(out)?;

    if options.byte_patterns {
        writeln!(out, "Byte patterns (little-endian):")?;
        for cell in cells {
            writeln!(
                out,
                "  {:<NAME_WIDTH$}  {}",
                cell.id.name(),
                hex_bytes(&cell.value.to_le_bytes())
            )?;
        }
        writeln!(out)?;
    }

    if let Some(scanner) = &options.scanner {
        writeln!(out, "Try:")?;
        for (scan_type, members) in &groups {
            if let Some(first) = members.first() {
                writeln!(
                    out,
                    "  {scanner} scan {process_id} {} {scan_type}",
                    shell_word(&first.value.scan_literal())
                )?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write the change report: every cell's new value next to its old one
///
/// ## Errors
///
/// Returns any error from writing to `out`.
pub fn write_change_report<W: Write + ?Sized>(
    out: &mut W,
    changes: &[CellChange],
    options: &ReportOptions,
) -> io::Result<()>
{
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Values changed:")?;
    for change in changes {
        writeln!(
            out,
            "  {:<NAME_WIDTH$} = {} (was {}) @ {}",
            change.id.name(),
            change.new,
            change.old,
            change.address
        )?;
    }
    writeln!(out, "{RULE}")?;

    if options.hints {
        writeln!(out, "Rescan for the new values to exercise changed-value detection.")?;
    }
    writeln!(out)?;

    Ok(())
}

/// Group cells by scanner type, keeping first-appearance order
fn group_by_scan_type(cells: &[CellSnapshot]) -> Vec<(&'static str, Vec<&CellSnapshot>)>
{
    let mut groups: Vec<(&'static str, Vec<&CellSnapshot>)> = Vec::new();
    for cell in cells {
        let scan_type = cell.id.kind().scan_type();
        match groups.iter_mut().find(|(name, _)| *name == scan_type) {
            Some((_, members)) => members.push(cell),
            None => groups.push((scan_type, vec![cell])),
        }
    }
    groups
}

/// Space-separated lowercase hex, e.g. `39 30 00 00`
fn hex_bytes(bytes: &[u8]) -> String
{
    bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ")
}

/// Quote a literal for a shell command line when it needs it
fn shell_word(literal: &str) -> String
{
    if !literal.is_empty() && literal.chars().all(|c| c.is_ascii_alphanumeric() || "._-".contains(c)) {
        literal.to_string()
    } else {
        format!("'{}'", literal.replace('\'', r"'\''"))
    }
}
