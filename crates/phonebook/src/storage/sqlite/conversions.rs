//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use phonebook_core::phone::PhoneNumber;
use rusqlite::Row;

/// Convert a SQLite row to a PhoneNumber.
///
/// Expected columns: id, phone_number, is_active, customer_id
pub fn row_to_phone_number(row: &Row) -> rusqlite::Result<PhoneNumber> {
    Ok(PhoneNumber {
        id: row.get(0)?,
        phone_number: row.get(1)?,
        activated: row.get(2)?,
        customer_id: row.get(3)?,
    })
}

/// Convert a `COUNT(*)` result to an unsigned record count.
pub fn count_to_u64(count: i64) -> Option<u64> {
    u64::try_from(count).ok()
}

/// Convert a page request offset to a SQLite `OFFSET` value.
///
/// Offsets past `i64::MAX` are clamped; such a page is empty either way.
pub fn offset_to_i64(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}
