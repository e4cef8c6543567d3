//! Fixed-capacity text buffers.

use std::fmt;

use crate::error::{MemfixError, MemfixResult};

/// A NUL-terminated text buffer of exactly `N` bytes
///
/// The buffer lives inline wherever the value lives, so a scanner sees the
/// text bytes at the cell's own address, followed by a terminator and zero
/// padding up to the capacity.
///
/// The content never exceeds `N - 1` bytes. Both constructors enforce this:
/// [`FixedText::from_literal`] at build time when used in a `const` item,
/// [`FixedText::try_new`] at run time with an error.
///
/// An over-long literal fails to compile:
///
/// ```rust,compile_fail
/// use memfix_core::types::FixedText;
///
/// const TOO_LONG: FixedText<16> = FixedText::from_literal("a-very-long-weapon-name");
/// let weapon = TOO_LONG;
/// ```
///
/// ```rust
/// use memfix_core::types::FixedText;
///
/// const WEAPON: FixedText<16> = FixedText::from_literal("sword");
/// assert_eq!(WEAPON.as_str(), "sword");
/// assert_eq!(WEAPON.as_bytes_with_nul(), b"sword\0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedText<const N: usize>
{
    buf: [u8; N],
}

impl<const N: usize> FixedText<N>
{
    /// Total buffer size in bytes, terminator included
    pub const CAPACITY: usize = N;

    /// Build a buffer from a literal during constant evaluation
    ///
    /// # Panics
    ///
    /// Panics if `text` plus its terminator does not fit in `N` bytes, or if
    /// `text` contains a NUL byte. Inside a `const` item the panic surfaces
    /// as a compile error.
    pub const fn from_literal(text: &str) -> Self
    {
        let bytes = text.as_bytes();
        assert!(bytes.len() < N, "text literal does not fit its buffer with a terminator");

        let mut buf = [0u8; N];
        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i] != 0, "text literal contains a NUL byte");
            buf[i] = bytes[i];
            i += 1;
        }
        FixedText { buf }
    }

    /// Build a buffer from arbitrary text, rejecting anything that would
    /// overflow it
    ///
    /// ## Errors
    ///
    /// - [`MemfixError::InteriorNul`] if `text` contains a NUL byte
    /// - [`MemfixError::TextCapacityExceeded`] if `text.len() + 1 > N`
    pub fn try_new(text: &str) -> MemfixResult<Self>
    {
        if let Some(position) = text.bytes().position(|b| b == 0) {
            return Err(MemfixError::InteriorNul { position });
        }
        if text.len() >= N {
            return Err(MemfixError::TextCapacityExceeded {
                len: text.len(),
                capacity: N,
            });
        }

        let mut buf = [0u8; N];
        buf[..text.len()].copy_from_slice(text.as_bytes());
        Ok(FixedText { buf })
    }

    /// Total buffer size in bytes, terminator included
    pub const fn capacity(&self) -> usize
    {
        N
    }

    /// Length of the content in bytes, terminator excluded
    pub fn len(&self) -> usize
    {
        self.buf.iter().position(|&b| b == 0).unwrap_or(N)
    }

    /// Whether the content is empty
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Content bytes without the terminator
    pub fn as_bytes(&self) -> &[u8]
    {
        &self.buf[..self.len()]
    }

    /// Content bytes followed by the terminator
    pub fn as_bytes_with_nul(&self) -> &[u8]
    {
        &self.buf[..=self.len()]
    }

    /// Content as a string slice
    pub fn as_str(&self) -> &str
    {
        // Content is always copied from a whole `&str`
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl<const N: usize> PartialEq<str> for FixedText<N>
{
    fn eq(&self, other: &str) -> bool
    {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for FixedText<N>
{
    fn eq(&self, other: &&str) -> bool
    {
        self.as_str() == *other
    }
}

impl<const N: usize> fmt::Display for FixedText<N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedText<N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "FixedText<{N}>({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_from_literal_zero_pads()
    {
        const TEXT: FixedText<8> = FixedText::from_literal("abc");
        assert_eq!(TEXT.len(), 3);
        assert_eq!(TEXT.buf, *b"abc\0\0\0\0\0");
    }

    #[test]
    fn test_from_literal_fills_to_capacity_minus_one()
    {
        const TEXT: FixedText<4> = FixedText::from_literal("abc");
        assert_eq!(TEXT.as_bytes_with_nul(), b"abc\0");
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_from_literal_rejects_exact_capacity()
    {
        let _ = FixedText::<3>::from_literal("abc");
    }

    #[test]
    #[should_panic(expected = "NUL")]
    fn test_from_literal_rejects_interior_nul()
    {
        let _ = FixedText::<8>::from_literal("a\0b");
    }

    #[test]
    fn test_empty_text()
    {
        let text = FixedText::<1>::try_new("").unwrap();
        assert!(text.is_empty());
        assert_eq!(text.as_str(), "");
        assert_eq!(text.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_debug_shows_capacity()
    {
        let text = FixedText::<16>::try_new("axe").unwrap();
        assert_eq!(format!("{text:?}"), "FixedText<16>(\"axe\")");
        assert_eq!(text.to_string(), "axe");
    }

    #[test]
    fn test_multibyte_text_round_trips()
    {
        let text = FixedText::<16>::try_new("épée").unwrap();
        assert_eq!(text.as_str(), "épée");
        assert_eq!(text.len(), "épée".len());
    }
}
