//! # Error Types
//!
//! The harness has no recoverable error paths in normal operation. These
//! variants cover what can still go wrong: the console going away, text
//! that would not fit a cell, and misuse of the state machine.

use thiserror::Error;

use crate::harness::Phase;

/// Main error type for memfix operations
#[derive(Error, Debug)]
pub enum MemfixError
{
    /// Text plus its terminator does not fit the target buffer
    ///
    /// Literal cell values are checked at build time; this variant is what
    /// runtime construction through `FixedText::try_new` reports instead of
    /// truncating.
    #[error("Text of {len} bytes does not fit a {capacity}-byte buffer with its terminator")]
    TextCapacityExceeded
    {
        /// Length of the rejected text in bytes
        len: usize,
        /// Buffer size in bytes, terminator included
        capacity: usize,
    },

    /// Text contains a NUL byte, which would cut it short in memory
    #[error("Text contains a NUL byte at offset {position}")]
    InteriorNul
    {
        /// Byte offset of the first NUL
        position: usize,
    },

    /// The harness was stepped past its final phase
    #[error("Harness already reached {0}")]
    AlreadyTerminated(Phase),

    /// Console I/O failed
    ///
    /// Reading the operator signal or writing the report failed. The binary
    /// treats this as fatal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, MemfixError>`
///
/// ```rust
/// use memfix_core::error::MemfixResult;
/// fn foo() -> MemfixResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type MemfixResult<T> = std::result::Result<T, MemfixError>;
