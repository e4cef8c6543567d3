//! # Value Harness
//!
//! The state machine that owns the cell bank and walks it through its two
//! phases:
//!
//! ```text
//! S0 Initialized ──report──▶ S1 AwaitingFirstSignal ──signal──▶ S2 Changed
//!                                                                  │ mutate + report
//!                         S4 Terminated ◀──signal── S3 AwaitingSecondSignal
//! ```
//!
//! ## Address stability
//!
//! The bank is boxed once in [`Harness::new`] and never replaced, so every
//! cell keeps the address printed in the first report until the harness is
//! dropped. Moving the `Harness` value itself moves only the pointer.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use memfix_core::prelude::*;
//!
//! let mut out = Vec::new();
//! let signal = LineSignal::new(Cursor::new("\n\n"));
//! let harness = Harness::new(ProcessId(1), signal, &mut out, ReportOptions::default());
//! let transcript = harness.run()?;
//!
//! assert_eq!(transcript.waits, 2);
//! assert_eq!(transcript.changes[0].new, CellValue::I32(54321));
//! # Ok::<(), memfix_core::MemfixError>(())
//! ```

use std::fmt;
use std::hint::black_box;
use std::io::Write;

use tracing::{debug, info, info_span};

use crate::bank::{CellBank, CellSnapshot};
use crate::error::{MemfixError, MemfixResult};
use crate::report::{write_change_report, write_initial_report, CellChange, ReportOptions};
use crate::signal::{OperatorSignal, Prompt};
use crate::types::{CellId, ProcessId};

/// Where the harness is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase
{
    /// S0: cells hold their initial values, nothing reported yet
    Initialized,
    /// S1: initial report written, blocked on the first signal
    AwaitingFirstSignal,
    /// S2: first signal received, change pending
    Changed,
    /// S3: change report written, blocked on the second signal
    AwaitingSecondSignal,
    /// S4: done
    Terminated,
}

impl fmt::Display for Phase
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Phase::Initialized => f.write_str("S0 Initialized"),
            Phase::AwaitingFirstSignal => f.write_str("S1 AwaitingFirstSignal"),
            Phase::Changed => f.write_str("S2 Changed"),
            Phase::AwaitingSecondSignal => f.write_str("S3 AwaitingSecondSignal"),
            Phase::Terminated => f.write_str("S4 Terminated"),
        }
    }
}

/// What a run reported, for callers that check the fixture itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript
{
    /// Cells as reported before the first signal
    pub initial: Vec<CellSnapshot>,
    /// Cell transitions as reported after the first signal, in change order
    pub changes: Vec<CellChange>,
    /// Operator signals waited for
    pub waits: u32,
    /// Full reports written
    pub reports: u32,
}

/// Owns the cells and drives them through both phases
pub struct Harness<S, W>
{
    cells: Box<CellBank>,
    phase: Phase,
    process_id: ProcessId,
    signal: S,
    out: W,
    options: ReportOptions,
    transcript: Transcript,
}

impl<S: OperatorSignal, W: Write> Harness<S, W>
{
    /// Place the cells in memory with their initial values
    ///
    /// Nothing is written to `out` until the first [`Harness::step`].
    pub fn new(process_id: ProcessId, signal: S, out: W, options: ReportOptions) -> Self
    {
        Harness {
            cells: Box::new(CellBank::INITIAL),
            phase: Phase::Initialized,
            process_id,
            signal,
            out,
            options,
            transcript: Transcript::default(),
        }
    }

    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    /// The live cells
    pub fn cells(&self) -> &CellBank
    {
        &self.cells
    }

    /// What has been reported so far
    pub fn transcript(&self) -> &Transcript
    {
        &self.transcript
    }

    /// Do the work owned by the current phase and advance to the next one
    ///
    /// | from | work | to |
    /// |---|---|---|
    /// | S0 | write initial report | S1 |
    /// | S1 | block on first signal | S2 |
    /// | S2 | apply changed values, write change report | S3 |
    /// | S3 | block on second signal | S4 |
    ///
    /// ## Errors
    ///
    /// - [`MemfixError::Io`] if the report cannot be written or the signal
    ///   cannot be read
    /// - [`MemfixError::AlreadyTerminated`] when called in S4
    pub fn step(&mut self) -> MemfixResult<Phase>
    {
        let next = match self.phase {
            Phase::Initialized => {
                self.report_initial()?;
                Phase::AwaitingFirstSignal
            }
            Phase::AwaitingFirstSignal => {
                self.wait(Prompt::ChangeValues)?;
                Phase::Changed
            }
            Phase::Changed => {
                self.apply_changes();
                self.report_changes()?;
                Phase::AwaitingSecondSignal
            }
            Phase::AwaitingSecondSignal => {
                self.wait(Prompt::Exit)?;
                Phase::Terminated
            }
            Phase::Terminated => return Err(MemfixError::AlreadyTerminated(Phase::Terminated)),
        };

        debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
        Ok(next)
    }

    /// Step until terminated
    ///
    /// ## Errors
    ///
    /// Returns the first error from [`Harness::step`].
    pub fn run(mut self) -> MemfixResult<Transcript>
    {
        let span = info_span!("harness", pid = %self.process_id);
        let _guard = span.enter();
        info!("harness started");

        while self.phase != Phase::Terminated {
            self.step()?;
        }

        info!(waits = self.transcript.waits, reports = self.transcript.reports, "harness finished");
        Ok(self.transcript)
    }

    fn report_initial(&mut self) -> MemfixResult<()>
    {
        let snapshot = self.cells.snapshot();
        write_initial_report(&mut self.out, self.process_id, &snapshot, &self.options)?;
        info!(cells = snapshot.len(), "initial values reported");

        black_box(&*self.cells);
        self.transcript.initial = snapshot;
        self.transcript.reports += 1;
        Ok(())
    }

    fn wait(&mut self, prompt: Prompt) -> MemfixResult<()>
    {
        writeln!(self.out, "{prompt}")?;
        // Everything reported so far must be visible before blocking
        self.out.flush()?;

        info!(?prompt, "waiting for operator");
        self.signal.wait_for(prompt)?;
        self.transcript.waits += 1;
        Ok(())
    }

    fn apply_changes(&mut self)
    {
        let mut changes = Vec::with_capacity(CellId::ALL.len());
        for id in CellId::ALL {
            let old = self.cells.value(id);
            self.cells.apply(id, &CellBank::CHANGED);
            let new = self.cells.value(id);
            debug!(cell = %id, %old, %new, "cell changed");
            changes.push(CellChange {
                id,
                old,
                new,
                address: self.cells.address(id),
            });
        }

        // The stores must reach memory before the process blocks again
        black_box(&*self.cells);
        self.transcript.changes = changes;
    }

    fn report_changes(&mut self) -> MemfixResult<()>
    {
        write_change_report(&mut self.out, &self.transcript.changes, &self.options)?;
        info!(cells = self.transcript.changes.len(), "changed values reported");
        self.transcript.reports += 1;
        Ok(())
    }
}
