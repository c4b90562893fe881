//! Cached phone number service decorator.
//!
//! Wraps a `PhoneNumberService` with read-through caching for both listings
//! and a write-through update of the by-id entry on activation changes.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use phonebook_core::cache::{
    customer_phone_numbers_key, deserialize_page, deserialize_phone_numbers, phone_number_key,
    phone_numbers_page_key, serialize_page, serialize_phone_number, serialize_phone_numbers, Cache,
    CacheError, SerializationError,
};
use phonebook_core::phone::{CustomerId, PageEnvelope, PageRequest, PhoneNumber, PhoneNumberId};
use phonebook_core::service::{PhoneNumberService, Result};

use super::SingleFlight;

type Encode<T> = fn(&T) -> std::result::Result<Vec<u8>, SerializationError>;
type Decode<T> = fn(&[u8]) -> std::result::Result<T, SerializationError>;

/// Cached phone number service decorator.
///
/// - **Reads**: check the cache; on a miss, load through the inner service
///   once per key (concurrent callers join the in-flight load) and store the
///   result.
/// - **Writes**: persist through the inner service, then store the updated
///   record under its by-id key.
///
/// Writes never touch the page or customer listings. Those entries keep
/// serving the previous `activated` value until the cache evicts them.
///
/// Cache failures are returned to the caller as collaborator errors.
///
/// # Type Parameters
///
/// * `S` - The underlying service implementation
/// * `C` - The cache implementation
pub struct CachedPhoneNumberService<S, C>
where
    S: PhoneNumberService,
    C: Cache,
{
    inner: Arc<S>,
    cache: Arc<C>,
    ttl: Option<Duration>,
    pages: SingleFlight<PageEnvelope<PhoneNumber>>,
    customers: SingleFlight<Vec<PhoneNumber>>,
}

impl<S, C> CachedPhoneNumberService<S, C>
where
    S: PhoneNumberService,
    C: Cache + 'static,
{
    /// Creates a new cached service.
    ///
    /// # Arguments
    ///
    /// * `inner` - The service to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for cached values, `None` to keep them until evicted
    pub fn new(inner: Arc<S>, cache: Arc<C>, ttl: Option<Duration>) -> Self {
        Self {
            inner,
            cache,
            ttl,
            pages: SingleFlight::new(),
            customers: SingleFlight::new(),
        }
    }

    async fn read_through<T, Fut>(
        &self,
        flights: &SingleFlight<T>,
        key: String,
        encode: Encode<T>,
        decode: Decode<T>,
        load: Fut,
    ) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        if let Some(value) = lookup(self.cache.as_ref(), &key, decode).await? {
            tracing::trace!(cache_key = %key, "Cache hit");
            return Ok(value);
        }
        tracing::trace!(cache_key = %key, "Cache miss");

        let cache = Arc::clone(&self.cache);
        let ttl = self.ttl;
        let flight_key = key.clone();

        flights
            .run(key, move || async move {
                // A load that finished between our miss and registering may have filled it.
                if let Some(value) = lookup(cache.as_ref(), &flight_key, decode).await? {
                    return Ok(value);
                }

                let value = load.await?;
                let bytes = encode(&value).map_err(CacheError::from)?;
                cache.set(&flight_key, &bytes, ttl).await?;
                Ok(value)
            })
            .await
    }
}

async fn lookup<C, T>(cache: &C, key: &str, decode: Decode<T>) -> Result<Option<T>>
where
    C: Cache + ?Sized,
{
    match cache.get(key).await? {
        Some(bytes) => {
            let value = decode(&bytes).map_err(|err| {
                tracing::warn!(cache_key = %key, error = %err, "Cached value could not be decoded");
                CacheError::from(err)
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

#[async_trait]
impl<S, C> PhoneNumberService for CachedPhoneNumberService<S, C>
where
    S: PhoneNumberService + 'static,
    C: Cache + 'static,
{
    async fn list_page(&self, request: PageRequest) -> Result<PageEnvelope<PhoneNumber>> {
        let inner = Arc::clone(&self.inner);
        self.read_through(
            &self.pages,
            phone_numbers_page_key(request),
            serialize_page,
            deserialize_page,
            async move { inner.list_page(request).await },
        )
        .await
    }

    async fn list_by_customer(&self, customer_id: CustomerId) -> Result<Vec<PhoneNumber>> {
        let inner = Arc::clone(&self.inner);
        self.read_through(
            &self.customers,
            customer_phone_numbers_key(customer_id),
            |phone_numbers: &Vec<PhoneNumber>| serialize_phone_numbers(phone_numbers),
            deserialize_phone_numbers,
            async move { inner.list_by_customer(customer_id).await },
        )
        .await
    }

    /// Persists the transition, then stores the record under its by-id key.
    ///
    /// A cache failure here is returned even though the new state is already
    /// persisted, so retrying the same transition yields `StateConflict`.
    async fn set_activation(&self, id: PhoneNumberId, desired: bool) -> Result<PhoneNumber> {
        let updated = self.inner.set_activation(id, desired).await?;

        let cache_key = phone_number_key(id);
        let bytes = serialize_phone_number(&updated).map_err(CacheError::from)?;
        if let Err(err) = self.cache.set(&cache_key, &bytes, self.ttl).await {
            tracing::error!(
                phone_number_id = id,
                error = %err,
                "Activation persisted but cache update failed"
            );
            return Err(err.into());
        }

        Ok(updated)
    }
}
