//! SQLite repository implementation.
//!
//! Implements `PhoneNumberRepository` from `phonebook_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use phonebook_core::phone::{CustomerId, PageRequest, PhoneNumber, PhoneNumberId};
use phonebook_core::storage::{PhoneNumberRepository, RepositoryError, Result};

use super::conversions::{count_to_u64, offset_to_i64, row_to_phone_number};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

const ENTITY_TYPE: &str = "PhoneNumber";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a query returning many phone numbers.
    async fn query_phone_numbers<P>(&self, sql: &'static str, params: P) -> Result<Vec<PhoneNumber>>
    where
        P: rusqlite::Params + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params, row_to_phone_number)
                    .map_err(wrap_err)?;

                let mut phone_numbers = Vec::new();
                for row_result in rows {
                    phone_numbers.push(row_result.map_err(wrap_err)?);
                }
                Ok(phone_numbers)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))
    }
}

#[async_trait]
impl PhoneNumberRepository for SqliteRepository {
    async fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_PHONE_NUMBERS, [], |row| row.get(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))?;

        count_to_u64(count)
            .ok_or_else(|| RepositoryError::InvalidData(format!("negative row count: {count}")))
    }

    async fn find_page(&self, request: PageRequest) -> Result<Vec<PhoneNumber>> {
        let limit = i64::from(request.size);
        let offset = offset_to_i64(request.offset());

        self.query_phone_numbers(schema::SELECT_PHONE_NUMBERS_PAGE, [limit, offset])
            .await
    }

    async fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<PhoneNumber>> {
        self.query_phone_numbers(schema::SELECT_PHONE_NUMBERS_BY_CUSTOMER, [customer_id])
            .await
    }

    async fn find_by_id(&self, id: PhoneNumberId) -> Result<Option<PhoneNumber>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PHONE_NUMBER_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_phone_number) {
                    Ok(phone_number) => Ok(Some(phone_number)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY_TYPE, id.to_string()))
    }

    async fn save(&self, record: &PhoneNumber) -> Result<PhoneNumber> {
        let saved = record.clone();
        let id = record.id;
        let phone_number = record.phone_number.clone();
        let activated = record.activated;
        let customer_id = record.customer_id;

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_PHONE_NUMBER,
                    rusqlite::params![id, phone_number, activated, customer_id],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY_TYPE, id.to_string()))?;

        Ok(saved)
    }
}
