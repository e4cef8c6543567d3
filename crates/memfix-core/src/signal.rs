//! # Operator Signal
//!
//! The harness blocks twice, waiting for a human (or a test script) to say
//! the scanner is done. [`OperatorSignal`] is that seam; [`LineSignal`] is the
//! console implementation.

use std::fmt;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::error::MemfixResult;

/// What the harness is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt
{
    /// Scan the initial values, then signal to change them
    ChangeValues,
    /// Scan the changed values, then signal to exit
    Exit,
}

impl fmt::Display for Prompt
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Prompt::ChangeValues => f.write_str("Press Enter to change all values..."),
            Prompt::Exit => f.write_str("Press Enter to exit..."),
        }
    }
}

/// A blocking source of operator acknowledgments
pub trait OperatorSignal
{
    /// Block until the operator acknowledges `prompt`
    ///
    /// There is no timeout and no cancellation.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::MemfixError::Io`] if the underlying input fails.
    fn wait_for(&mut self, prompt: Prompt) -> MemfixResult<()>;
}

impl<T: OperatorSignal + ?Sized> OperatorSignal for &mut T
{
    fn wait_for(&mut self, prompt: Prompt) -> MemfixResult<()>
    {
        (**self).wait_for(prompt)
    }
}

/// Treats one line of input as one acknowledgment
///
/// Line content is ignored. End of input also counts as an acknowledgment,
/// so a fixture started with stdin closed runs straight through instead of
/// hanging.
#[derive(Debug)]
pub struct LineSignal<R>
{
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineSignal<R>
{
    pub fn new(reader: R) -> Self
    {
        LineSignal {
            reader,
            line: Vec::new(),
        }
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R
    {
        self.reader
    }
}

impl<R: BufRead> OperatorSignal for LineSignal<R>
{
    fn wait_for(&mut self, prompt: Prompt) -> MemfixResult<()>
    {
        self.line.clear();
        // Raw bytes, so input that is not UTF-8 still counts
        let read = self.reader.read_until(b'\n', &mut self.line)?;
        if read == 0 {
            warn!(?prompt, "input closed, treating end of input as the signal");
        } else {
            debug!(?prompt, bytes = read, "operator signal received");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use std::io::{BufReader, Cursor, Read};

    use super::*;
    use crate::error::MemfixError;

    #[test]
    fn test_line_signal_consumes_one_line_per_wait()
    {
        let mut signal = LineSignal::new(Cursor::new("first\nsecond\nthird\n"));
        signal.wait_for(Prompt::ChangeValues).unwrap();
        signal.wait_for(Prompt::Exit).unwrap();

        let mut rest = String::new();
        signal.into_inner().read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "third\n");
    }

    #[test]
    fn test_line_signal_accepts_end_of_input()
    {
        let mut signal = LineSignal::new(Cursor::new(""));
        assert!(signal.wait_for(Prompt::ChangeValues).is_ok());
        assert!(signal.wait_for(Prompt::Exit).is_ok());
    }

    #[test]
    fn test_line_signal_ignores_content_encoding()
    {
        let mut signal = LineSignal::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        assert!(signal.wait_for(Prompt::ChangeValues).is_ok());
    }

    struct FailingReader;

    impl Read for FailingReader
    {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize>
        {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "console gone"))
        }
    }

    #[test]
    fn test_line_signal_propagates_read_errors()
    {
        let mut signal = LineSignal::new(BufReader::new(FailingReader));
        let err = signal.wait_for(Prompt::ChangeValues).unwrap_err();
        assert!(matches!(err, MemfixError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_prompt_text()
    {
        assert!(Prompt::ChangeValues.to_string().contains("change"));
        assert!(Prompt::Exit.to_string().contains("exit"));
    }
}
