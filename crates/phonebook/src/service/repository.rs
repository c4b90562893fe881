//! Repository-backed service with no caching.

use std::sync::Arc;

use async_trait::async_trait;

use phonebook_core::phone::{CustomerId, PageEnvelope, PageRequest, PhoneNumber, PhoneNumberId};
use phonebook_core::service::{PhoneNumberService, Result};
use phonebook_core::storage::PhoneNumberRepository;

use super::{assembler, guard};

/// Phone number service that talks straight to the persistence collaborator.
///
/// Wrap it in [`super::CachedPhoneNumberService`] for read-through caching.
pub struct RepositoryPhoneNumberService<R>
where
    R: PhoneNumberRepository,
{
    repository: Arc<R>,
}

impl<R> RepositoryPhoneNumberService<R>
where
    R: PhoneNumberRepository,
{
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PhoneNumberService for RepositoryPhoneNumberService<R>
where
    R: PhoneNumberRepository + 'static,
{
    async fn list_page(&self, request: PageRequest) -> Result<PageEnvelope<PhoneNumber>> {
        assembler::list_page(self.repository.as_ref(), request).await
    }

    async fn list_by_customer(&self, customer_id: CustomerId) -> Result<Vec<PhoneNumber>> {
        Ok(self.repository.find_by_customer(customer_id).await?)
    }

    async fn set_activation(&self, id: PhoneNumberId, desired: bool) -> Result<PhoneNumber> {
        guard::set_activation(self.repository.as_ref(), id, desired).await
    }
}
