//! Common module for library exports

pub use crate::bank::{CellBank, CellSnapshot};
pub use crate::error::{MemfixError, MemfixResult};
pub use crate::harness::{Harness, Phase, Transcript};
pub use crate::report::{CellChange, ReportOptions};
pub use crate::signal::{LineSignal, OperatorSignal, Prompt};
pub use crate::types::{Address, CellId, CellKind, CellValue, FixedText, ProcessId};
