//! # Types
//!
//! The vocabulary shared by the cell bank, the harness, and the reports:
//! where a cell lives, what kind of value it holds, and what that value is.

pub mod address;
pub mod cell;
pub mod process;
pub mod text;

// Re-export all public types
pub use address::Address;
pub use cell::{CellId, CellKind, CellValue};
pub use process::ProcessId;
pub use text::FixedText;
