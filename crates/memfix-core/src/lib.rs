//! # memfix-core
//!
//! A fixture for validating memory scanners.
//!
//! This crate holds a fixed set of typed values at stable addresses and
//! walks them through two known states:
//! - Twelve cells across `i32`, `i64`, `f32`, `f64`, and fixed-size text
//! - An initial report with every value, address, and search hint
//! - A blocking wait, one deterministic change of every cell, and a second
//!   report showing old and new values
//!
//! Everything a scanner test needs to know is decided at build time: the
//! literal values live in `const` items, and a text literal that would not
//! fit its buffer fails to compile.

pub mod bank;
pub mod error;
pub mod harness;
pub mod prelude;
pub mod report;
pub mod signal;
pub mod types;

pub use bank::CellBank;
// Re-export commonly used types
pub use error::{MemfixError, MemfixResult};
pub use harness::{Harness, Phase, Transcript};
pub use signal::{LineSignal, OperatorSignal, Prompt};
