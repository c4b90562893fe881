use async_trait::async_trait;

use crate::phone::{CustomerId, PageEnvelope, PageRequest, PhoneNumber, PhoneNumberId};

use super::Result;

/// The operations exposed to the boundary layer.
#[async_trait]
pub trait PhoneNumberService: Send + Sync {
    /// Gets one page of phone numbers with pagination metadata.
    async fn list_page(&self, request: PageRequest) -> Result<PageEnvelope<PhoneNumber>>;

    /// Gets all phone numbers owned by a customer.
    async fn list_by_customer(&self, customer_id: CustomerId) -> Result<Vec<PhoneNumber>>;

    /// Activates (`true`) or deactivates (`false`) a phone number.
    async fn set_activation(&self, id: PhoneNumberId, desired: bool) -> Result<PhoneNumber>;
}
