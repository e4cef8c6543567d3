//! # memfix Utilities
//!
//! Shared utilities and helpers for memfix.
//!
//! This crate carries the logging infrastructure used across the workspace,
//! built on `tracing`.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{
    LogFormat, LogLevel, LoggingError, LoggingGuard, init_logging, init_logging_from, init_logging_with_level,
};
pub use tracing::{debug, error, info, trace, warn};
