//! Memory address type.

use std::fmt;

/// Strongly typed memory address
///
/// A thin wrapper around `u64` so that cell locations never get mixed up
/// with the cell values themselves, which are also integers.
///
/// Addresses are always printed as zero-padded hexadecimal, which is the
/// form memory scanners accept as input.
///
/// ## Example
///
/// ```rust
/// use memfix_core::types::Address;
///
/// let value = 7_i32;
/// let addr = Address::of(&value);
/// assert!(!addr.is_null());
/// assert_eq!(addr.to_string().len(), 18); // "0x" + 16 hex digits
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

impl Address
{
    /// The null address (0x0)
    pub const ZERO: Self = Address(0);

    /// Create a new address from a `u64` value
    pub const fn new(value: u64) -> Self
    {
        Address(value)
    }

    /// Address of a value living in this process
    ///
    /// The result only stays meaningful while `value` is neither moved nor
    /// dropped.
    pub fn of<T: ?Sized>(value: &T) -> Self
    {
        let ptr: *const T = value;
        Address(ptr.cast::<u8>() as usize as u64)
    }

    /// Get the raw `u64` value of this address
    pub const fn value(self) -> u64
    {
        self.0
    }

    /// Whether this is the null address
    pub const fn is_null(self) -> bool
    {
        self.0 == 0
    }

    /// Add an offset to this address, checking for overflow
    ///
    /// ```rust
    /// use memfix_core::types::Address;
    ///
    /// let addr = Address::from(0x1000);
    /// assert_eq!(addr.checked_add(0x100), Some(Address::from(0x1100)));
    /// assert_eq!(addr.checked_add(u64::MAX), None);
    /// ```
    pub fn checked_add(self, offset: u64) -> Option<Self>
    {
        self.0.checked_add(offset).map(Address)
    }

    /// Distance in bytes from `base` to this address, if it lies at or above it
    pub fn offset_from(self, base: Address) -> Option<u64>
    {
        self.0.checked_sub(base.0)
    }
}

impl From<u64> for Address
{
    fn from(value: u64) -> Self
    {
        Address(value)
    }
}

impl From<Address> for u64
{
    fn from(address: Address) -> Self
    {
        address.0
    }
}

impl fmt::Display for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0)
    }
}

impl fmt::LowerHex for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_address_display_is_padded_hex()
    {
        assert_eq!(Address::new(0x1000).to_string(), "0x0000000000001000");
        assert_eq!(format!("{:x}", Address::new(0xbeef)), "beef");
    }

    #[test]
    fn test_address_of_distinct_fields()
    {
        let pair = (1_u32, 2_u32);
        let first = Address::of(&pair.0);
        let second = Address::of(&pair.1);
        assert_ne!(first, second);
        assert_eq!(first.offset_from(second).or(second.offset_from(first)), Some(4));
    }

    #[test]
    fn test_address_offset_from_below_base()
    {
        assert_eq!(Address::new(0x10).offset_from(Address::new(0x20)), None);
        assert_eq!(Address::new(0x20).offset_from(Address::new(0x10)), Some(0x10));
    }
}
