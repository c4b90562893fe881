//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Phone numbers table. customer_id is a plain reference, not a foreign key.
CREATE TABLE IF NOT EXISTS phone_numbers (
    id INTEGER PRIMARY KEY,
    phone_number TEXT NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 0,
    customer_id INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_phone_numbers_customer_id ON phone_numbers(customer_id);
"#;

pub const COUNT_PHONE_NUMBERS: &str = r#"
SELECT COUNT(*)
FROM phone_numbers
"#;

pub const SELECT_PHONE_NUMBERS_PAGE: &str = r#"
SELECT id, phone_number, is_active, customer_id
FROM phone_numbers
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const SELECT_PHONE_NUMBERS_BY_CUSTOMER: &str = r#"
SELECT id, phone_number, is_active, customer_id
FROM phone_numbers
WHERE customer_id = ?1
ORDER BY id ASC
"#;

pub const SELECT_PHONE_NUMBER_BY_ID: &str = r#"
SELECT id, phone_number, is_active, customer_id
FROM phone_numbers
WHERE id = ?1
"#;

pub const UPSERT_PHONE_NUMBER: &str = r#"
INSERT INTO phone_numbers (id, phone_number, is_active, customer_id)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT(id) DO UPDATE SET
    phone_number = excluded.phone_number,
    is_active = excluded.is_active,
    customer_id = excluded.customer_id
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS phone_numbers"));
        assert!(CREATE_TABLES.contains("idx_phone_numbers_customer_id"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(COUNT_PHONE_NUMBERS.contains("COUNT(*)"));
        assert!(SELECT_PHONE_NUMBERS_PAGE.contains("LIMIT ?1 OFFSET ?2"));
        assert!(SELECT_PHONE_NUMBERS_PAGE.contains("ORDER BY id"));
        assert!(SELECT_PHONE_NUMBERS_BY_CUSTOMER.contains("customer_id = ?1"));
        assert!(SELECT_PHONE_NUMBER_BY_ID.contains("id = ?1"));
        assert!(UPSERT_PHONE_NUMBER.contains("ON CONFLICT(id) DO UPDATE"));
    }
}
