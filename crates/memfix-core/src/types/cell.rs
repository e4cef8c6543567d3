//! Cell identities, kinds, and values.

use std::fmt;

/// The type of value a cell stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind
{
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// NUL-terminated text in a buffer of `capacity` bytes
    Text
    {
        /// Buffer size in bytes, terminator included
        capacity: usize,
    },
}

impl CellKind
{
    /// Value type name as the memscan scanner spells it
    pub const fn scan_type(self) -> &'static str
    {
        match self {
            CellKind::I32 => "i32",
            CellKind::I64 => "i64",
            CellKind::F32 => "f32",
            CellKind::F64 => "f64",
            CellKind::Text { .. } => "string",
        }
    }

    /// Bytes the cell occupies in memory
    pub const fn size(self) -> usize
    {
        match self {
            CellKind::I32 | CellKind::F32 => 4,
            CellKind::I64 | CellKind::F64 => 8,
            CellKind::Text { capacity } => capacity,
        }
    }
}

impl fmt::Display for CellKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            CellKind::Text { capacity } => write!(f, "text<{capacity}>"),
            other => f.write_str(other.scan_type()),
        }
    }
}

/// A cell's content at one point in time
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue
{
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
}

impl CellValue
{
    /// The value as an operator would type it into a scanner: numbers as
    /// written, text without quotes
    pub fn scan_literal(&self) -> String
    {
        match self {
            CellValue::I32(v) => v.to_string(),
            CellValue::I64(v) => v.to_string(),
            CellValue::F32(v) => v.to_string(),
            CellValue::F64(v) => v.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// The byte pattern a scanner matches for this value
    ///
    /// Numbers use the native little-endian layout. Text is the raw content
    /// without its terminator.
    pub fn to_le_bytes(&self) -> Vec<u8>
    {
        match self {
            CellValue::I32(v) => v.to_le_bytes().to_vec(),
            CellValue::I64(v) => v.to_le_bytes().to_vec(),
            CellValue::F32(v) => v.to_le_bytes().to_vec(),
            CellValue::F64(v) => v.to_le_bytes().to_vec(),
            CellValue::Text(s) => s.as_bytes().to_vec(),
        }
    }
}

impl fmt::Display for CellValue
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            CellValue::Text(s) => write!(f, "\"{s}\""),
            other => f.write_str(&other.scan_literal()),
        }
    }
}

/// The logical name of every cell the harness owns
///
/// Declaration order is the order cells are reported and changed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellId
{
    SecretNumber,
    HealthPoints,
    Score,
    BigNumber,
    Coins,
    PlayerX,
    Speed,
    Balance,
    Experience,
    Username,
    Weapon,
    Location,
}

impl CellId
{
    /// Every cell, in report order
    pub const ALL: [CellId; 12] = [
        CellId::SecretNumber,
        CellId::HealthPoints,
        CellId::Score,
        CellId::BigNumber,
        CellId::Coins,
        CellId::PlayerX,
        CellId::Speed,
        CellId::Balance,
        CellId::Experience,
        CellId::Username,
        CellId::Weapon,
        CellId::Location,
    ];

    /// Name used in reports
    pub const fn name(self) -> &'static str
    {
        match self {
            CellId::SecretNumber => "secret_number",
            CellId::HealthPoints => "health_points",
            CellId::Score => "score",
            CellId::BigNumber => "big_number",
            CellId::Coins => "coins",
            CellId::PlayerX => "player_x",
            CellId::Speed => "speed",
            CellId::Balance => "balance",
            CellId::Experience => "experience",
            CellId::Username => "username",
            CellId::Weapon => "weapon",
            CellId::Location => "location",
        }
    }

    pub const fn kind(self) -> CellKind
    {
        match self {
            CellId::SecretNumber | CellId::HealthPoints | CellId::Score => CellKind::I32,
            CellId::BigNumber | CellId::Coins => CellKind::I64,
            CellId::PlayerX | CellId::Speed => CellKind::F32,
            CellId::Balance | CellId::Experience => CellKind::F64,
            CellId::Username => CellKind::Text {
                capacity: crate::bank::USERNAME_CAPACITY,
            },
            CellId::Weapon => CellKind::Text {
                capacity: crate::bank::WEAPON_CAPACITY,
            },
            CellId::Location => CellKind::Text {
                capacity: crate::bank::LOCATION_CAPACITY,
            },
        }
    }
}

impl fmt::Display for CellId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order()
    {
        let mut sorted = CellId::ALL;
        sorted.sort();
        assert_eq!(sorted, CellId::ALL);
    }

    #[test]
    fn test_names_are_unique()
    {
        let mut names: Vec<_> = CellId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CellId::ALL.len());
    }

    #[test]
    fn test_kind_display()
    {
        assert_eq!(CellKind::I64.to_string(), "i64");
        assert_eq!(CellKind::Text { capacity: 16 }.to_string(), "text<16>");
        assert_eq!(CellKind::Text { capacity: 16 }.scan_type(), "string");
    }

    #[test]
    fn test_value_display_quotes_text_only()
    {
        assert_eq!(CellValue::Text("sword".into()).to_string(), "\"sword\"");
        assert_eq!(CellValue::Text("sword".into()).scan_literal(), "sword");
        assert_eq!(CellValue::F32(42.5).to_string(), "42.5");
        assert_eq!(CellValue::I64(9_876_543_210).to_string(), "9876543210");
    }

    #[test]
    fn test_value_byte_patterns()
    {
        assert_eq!(CellValue::I32(12345).to_le_bytes(), vec![0x39, 0x30, 0x00, 0x00]);
        assert_eq!(CellValue::F32(42.5).to_le_bytes(), vec![0x00, 0x00, 0x2a, 0x42]);
        assert_eq!(CellValue::Text("axe".into()).to_le_bytes(), b"axe".to_vec());
    }
}
