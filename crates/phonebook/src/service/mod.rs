//! Phone number service implementations.
//!
//! The facade handed to the HTTP layer is a [`CachedPhoneNumberService`]
//! wrapping a [`RepositoryPhoneNumberService`], which in turn composes the
//! page assembler and the activation guard over a repository.

mod assembler;
mod cached;
mod guard;
mod repository;
mod single_flight;

use std::sync::Arc;
use std::time::Duration;

use phonebook_core::cache::Cache;
use phonebook_core::service::PhoneNumberService;
use phonebook_core::storage::PhoneNumberRepository;

pub use cached::CachedPhoneNumberService;
pub use repository::RepositoryPhoneNumberService;
pub use single_flight::SingleFlight;

/// Builds the cached service facade over a repository and a cache.
pub fn phone_number_service<R, C>(
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Option<Duration>,
) -> Arc<dyn PhoneNumberService>
where
    R: PhoneNumberRepository + 'static,
    C: Cache + 'static,
{
    let inner = Arc::new(RepositoryPhoneNumberService::new(repository));
    Arc::new(CachedPhoneNumberService::new(inner, cache, ttl))
}
