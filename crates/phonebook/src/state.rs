//! Application state shared by all request handlers.
//!
//! The storage backend is chosen at compile time via feature flags; the cache
//! is always the in-process LRU cache.

use std::sync::Arc;

use phonebook_core::phone::generate_seed_phone_numbers;
use phonebook_core::service::PhoneNumberService;
use phonebook_core::storage::PhoneNumberRepository;

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::service::phone_number_service;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Phone number service (cached, wraps underlying storage).
    pub phone_service: Arc<dyn PhoneNumberService>,
}

impl AppState {
    /// Wires the cached service facade over the given repository.
    async fn build<R>(repository: Arc<R>, config: &Config) -> Result<Self, anyhow::Error>
    where
        R: PhoneNumberRepository + 'static,
    {
        if config.seed_demo_data {
            seed_demo_data(repository.as_ref()).await?;
        }

        let cache = Arc::new(MemoryCache::new(config.cache_max_entries)?);
        tracing::debug!(
            max_entries = config.cache_max_entries,
            ttl_seconds = config.cache_ttl_seconds,
            "Memory cache ready"
        );

        Ok(Self {
            phone_service: phone_number_service(repository, cache, config.cache_ttl()),
        })
    }
}

/// Writes the demo records, overwriting any stored record with the same ID.
async fn seed_demo_data<R>(repository: &R) -> Result<(), anyhow::Error>
where
    R: PhoneNumberRepository + ?Sized,
{
    let records = generate_seed_phone_numbers();
    let count = records.len();
    for record in &records {
        repository.save(record).await?;
    }
    tracing::info!(count, "Seeded demo phone numbers");
    Ok(())
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            Self::build(Arc::new(InMemoryRepository::new()), config).await
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = SqliteRepository::new(&config.sqlite_path).await?;
            tracing::info!(path = %config.sqlite_path, "Opened SQLite database");
            Self::build(Arc::new(repository), config).await
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::service::{CachedPhoneNumberService, RepositoryPhoneNumberService};
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState over the demo records with a non-expiring cache.
        pub fn with_demo_data() -> Self {
            let repository = Arc::new(InMemoryRepository::with_phone_numbers(
                generate_seed_phone_numbers(),
            ));
            let cache = Arc::new(MemoryCache::new(1000).expect("non-zero capacity"));
            let inner = Arc::new(RepositoryPhoneNumberService::new(repository));
            Self {
                phone_service: Arc::new(CachedPhoneNumberService::new(inner, cache, None)),
            }
        }
    }

    impl Default for AppState {
        fn default() -> Self {
            Self::with_demo_data()
        }
    }

    #[tokio::test]
    async fn test_new_seeds_demo_data() {
        let config = Config {
            cache_ttl_seconds: 0,
            cache_max_entries: 10,
            sqlite_path: ":memory:".to_string(),
            seed_demo_data: true,
            request_timeout_seconds: 10,
        };

        let state = AppState::new(&config).await.unwrap();

        let page = state
            .phone_service
            .list_page(phonebook_core::phone::PageRequest::new(0, 10).unwrap())
            .await
            .unwrap();
        assert_eq!(page.total_records, 5);
    }

    #[tokio::test]
    async fn test_new_without_seed_is_empty() {
        let config = Config {
            cache_ttl_seconds: 60,
            cache_max_entries: 10,
            sqlite_path: ":memory:".to_string(),
            seed_demo_data: false,
            request_timeout_seconds: 10,
        };

        let state = AppState::new(&config).await.unwrap();

        assert!(state.phone_service.list_by_customer(1).await.unwrap().is_empty());
    }
}
