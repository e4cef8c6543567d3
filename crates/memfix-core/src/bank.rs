//! # Cell Bank
//!
//! The single aggregate holding every scanned value, plus the two literal
//! states it moves between.
//!
//! The field layout is `#[repr(C)]` so the order in memory matches the
//! report order, which keeps addresses easy to eyeball in a scanner.

use crate::types::{Address, CellId, CellValue, FixedText};

/// Buffer size of the `username` cell, terminator included
pub const USERNAME_CAPACITY: usize = 32;
/// Buffer size of the `weapon` cell, terminator included
pub const WEAPON_CAPACITY: usize = 16;
/// Buffer size of the `location` cell, terminator included
pub const LOCATION_CAPACITY: usize = 20;

/// Every scanned value, one field per [`CellId`]
///
/// Fields are private: once placed in memory the bank is only written
/// through [`CellBank::apply`].
#[repr(C)]
#[derive(Debug, Clone, PartialEq)]
pub struct CellBank
{
    secret_number: i32,
    health_points: i32,
    score: i32,
    big_number: i64,
    coins: i64,
    player_x: f32,
    speed: f32,
    balance: f64,
    experience: f64,
    username: FixedText<USERNAME_CAPACITY>,
    weapon: FixedText<WEAPON_CAPACITY>,
    location: FixedText<LOCATION_CAPACITY>,
}

impl CellBank
{
    /// Values held from process start until the first operator signal
    pub const INITIAL: CellBank = CellBank {
        secret_number: 12_345,
        health_points: 100,
        score: 999,
        big_number: 9_876_543_210,
        coins: 1_000_000,
        player_x: 42.5,
        speed: 15.75,
        balance: 1337.1337,
        experience: 9999.9999,
        username: FixedText::from_literal("testplayer"),
        weapon: FixedText::from_literal("sword"),
        location: FixedText::from_literal("dungeon"),
    };

    /// Values written once the operator signals the first time
    pub const CHANGED: CellBank = CellBank {
        secret_number: 54_321,
        health_points: 75,
        score: 1500,
        big_number: 1_111_111_111,
        coins: 2_000_000,
        player_x: 99.9,
        speed: 25.0,
        balance: 9999.9999,
        experience: 12345.6789,
        username: FixedText::from_literal("newplayer"),
        weapon: FixedText::from_literal("axe"),
        location: FixedText::from_literal("castle"),
    };

    /// Current value of one cell
    pub fn value(&self, id: CellId) -> CellValue
    {
        match id {
            CellId::SecretNumber => CellValue::I32(self.secret_number),
            CellId::HealthPoints => CellValue::I32(self.health_points),
            CellId::Score => CellValue::I32(self.score),
            CellId::BigNumber => CellValue::I64(self.big_number),
            CellId::Coins => CellValue::I64(self.coins),
            CellId::PlayerX => CellValue::F32(self.player_x),
            CellId::Speed => CellValue::F32(self.speed),
            CellId::Balance => CellValue::F64(self.balance),
            CellId::Experience => CellValue::F64(self.experience),
            CellId::Username => CellValue::Text(self.username.as_str().to_owned()),
            CellId::Weapon => CellValue::Text(self.weapon.as_str().to_owned()),
            CellId::Location => CellValue::Text(self.location.as_str().to_owned()),
        }
    }

    /// Where one cell lives
    ///
    /// Stable for as long as the bank itself is not moved.
    pub fn address(&self, id: CellId) -> Address
    {
        match id {
            CellId::SecretNumber => Address::of(&self.secret_number),
            CellId::HealthPoints => Address::of(&self.health_points),
            CellId::Score => Address::of(&self.score),
            CellId::BigNumber => Address::of(&self.big_number),
            CellId::Coins => Address::of(&self.coins),
            CellId::PlayerX => Address::of(&self.player_x),
            CellId::Speed => Address::of(&self.speed),
            CellId::Balance => Address::of(&self.balance),
            CellId::Experience => Address::of(&self.experience),
            CellId::Username => Address::of(&self.username),
            CellId::Weapon => Address::of(&self.weapon),
            CellId::Location => Address::of(&self.location),
        }
    }

    /// Copy one cell's value from `source` into this bank in place
    pub fn apply(&mut self, id: CellId, source: &CellBank)
    {
        match id {
            CellId::SecretNumber => self.secret_number = source.secret_number,
            CellId::HealthPoints => self.health_points = source.health_points,
            CellId::Score => self.score = source.score,
            CellId::BigNumber => self.big_number = source.big_number,
            CellId::Coins => self.coins = source.coins,
            CellId::PlayerX => self.player_x = source.player_x,
            CellId::Speed => self.speed = source.speed,
            CellId::Balance => self.balance = source.balance,
            CellId::Experience => self.experience = source.experience,
            CellId::Username => self.username = source.username,
            CellId::Weapon => self.weapon = source.weapon,
            CellId::Location => self.location = source.location,
        }
    }

    /// Values and addresses of every cell, in report order
    pub fn snapshot(&self) -> Vec<CellSnapshot>
    {
        CellId::ALL
            .iter()
            .map(|&id| CellSnapshot {
                id,
                value: self.value(id),
                address: self.address(id),
            })
            .collect()
    }
}

/// One cell's value and location at the moment a report was taken
#[derive(Debug, Clone, PartialEq)]
pub struct CellSnapshot
{
    pub id: CellId,
    pub value: CellValue,
    pub address: Address,
}
