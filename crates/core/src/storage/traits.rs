use async_trait::async_trait;

use crate::phone::{CustomerId, PageRequest, PhoneNumber, PhoneNumberId};

use super::Result;

/// Persistence collaborator for phone number records.
#[async_trait]
pub trait PhoneNumberRepository: Send + Sync {
    /// Counts all phone numbers.
    async fn count(&self) -> Result<u64>;

    /// Gets one page of phone numbers ordered by ID.
    async fn find_page(&self, request: PageRequest) -> Result<Vec<PhoneNumber>>;

    /// Gets all phone numbers owned by a customer.
    async fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<PhoneNumber>>;

    /// Gets a phone number by its ID.
    async fn find_by_id(&self, id: PhoneNumberId) -> Result<Option<PhoneNumber>>;

    /// Inserts or updates a phone number, returning the persisted record.
    async fn save(&self, record: &PhoneNumber) -> Result<PhoneNumber>;
}
