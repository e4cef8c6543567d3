//! Tests for fixed-capacity text cells

use memfix_core::bank::{LOCATION_CAPACITY, USERNAME_CAPACITY, WEAPON_CAPACITY};
use memfix_core::error::MemfixError;
use memfix_core::types::{CellId, CellKind, FixedText};

#[test]
fn test_capacities_match_cell_kinds()
{
    assert_eq!(CellId::Username.kind(), CellKind::Text { capacity: USERNAME_CAPACITY });
    assert_eq!(CellId::Weapon.kind(), CellKind::Text { capacity: WEAPON_CAPACITY });
    assert_eq!(CellId::Location.kind(), CellKind::Text { capacity: LOCATION_CAPACITY });
}

#[test]
fn test_username_of_31_bytes_fits()
{
    let name = "a".repeat(USERNAME_CAPACITY - 1);
    let text = FixedText::<USERNAME_CAPACITY>::try_new(&name).unwrap();
    assert_eq!(text.len(), 31);
    assert_eq!(text.as_bytes_with_nul().len(), USERNAME_CAPACITY);
}

#[test]
fn test_username_of_32_bytes_is_rejected()
{
    let name = "a".repeat(USERNAME_CAPACITY);
    let err = FixedText::<USERNAME_CAPACITY>::try_new(&name).unwrap_err();
    assert!(matches!(
        err,
        MemfixError::TextCapacityExceeded { len: 32, capacity: 32 }
    ));
}

#[test]
fn test_longer_text_is_rejected_not_truncated()
{
    let err = FixedText::<WEAPON_CAPACITY>::try_new("legendary greatsword").unwrap_err();
    assert!(matches!(err, MemfixError::TextCapacityExceeded { len: 20, capacity: 16 }));
}

#[test]
fn test_interior_nul_is_rejected()
{
    let err = FixedText::<LOCATION_CAPACITY>::try_new("cas\0tle").unwrap_err();
    assert!(matches!(err, MemfixError::InteriorNul { position: 3 }));
}

#[test]
fn test_capacity_constant()
{
    assert_eq!(FixedText::<WEAPON_CAPACITY>::CAPACITY, 16);
    let text = FixedText::<WEAPON_CAPACITY>::try_new("axe").unwrap();
    assert_eq!(text.capacity(), 16);
    assert_eq!(text, "axe");
}
