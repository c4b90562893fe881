//! Guarded activation transitions.

use phonebook_core::phone::{apply_activation, PhoneNumber, PhoneNumberId};
use phonebook_core::service::{Result, ServiceError};
use phonebook_core::storage::PhoneNumberRepository;

/// Sets the activation flag of a phone number and persists it.
///
/// Fails with [`ServiceError::NotFound`] when the record does not exist and
/// with [`ServiceError::StateConflict`] when it already holds `desired`; in
/// both cases nothing is saved.
///
/// This is a check-then-act sequence with no locking. Concurrent writers to
/// the same ID must be serialized by the repository.
pub async fn set_activation<R>(repository: &R, id: PhoneNumberId, desired: bool) -> Result<PhoneNumber>
where
    R: PhoneNumberRepository + ?Sized,
{
    let record = repository
        .find_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(id))?;

    let updated = apply_activation(record, desired)?;
    let saved = repository.save(&updated).await?;

    tracing::debug!(phone_number_id = id, activated = desired, "Phone number activation changed");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use phonebook_core::phone::{generate_seed_phone_numbers, CustomerId, PageRequest};
    use phonebook_core::storage::{RepositoryError, Result as RepoResult};

    use crate::storage::InMemoryRepository;

    // Wraps the in-memory repository and counts saves.
    struct CountingRepository {
        inner: InMemoryRepository,
        saves: AtomicUsize,
        save_error: Option<RepositoryError>,
    }

    impl CountingRepository {
        fn seeded() -> Self {
            Self {
                inner: InMemoryRepository::with_phone_numbers(generate_seed_phone_numbers()),
                saves: AtomicUsize::new(0),
                save_error: None,
            }
        }
    }

    #[async_trait]
    impl PhoneNumberRepository for CountingRepository {
        async fn count(&self) -> RepoResult<u64> {
            self.inner.count().await
        }

        async fn find_page(&self, request: PageRequest) -> RepoResult<Vec<PhoneNumber>> {
            self.inner.find_page(request).await
        }

        async fn find_by_customer(&self, customer_id: CustomerId) -> RepoResult<Vec<PhoneNumber>> {
            self.inner.find_by_customer(customer_id).await
        }

        async fn find_by_id(&self, id: PhoneNumberId) -> RepoResult<Option<PhoneNumber>> {
            self.inner.find_by_id(id).await
        }

        async fn save(&self, record: &PhoneNumber) -> RepoResult<PhoneNumber> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.save_error {
                return Err(err.clone());
            }
            self.inner.save(record).await
        }
    }

    #[tokio::test]
    async fn test_deactivate_active_record() {
        let repo = CountingRepository::seeded();

        let updated = set_activation(&repo, 1, false).await.unwrap();

        assert!(!updated.activated);
        assert_eq!(updated.id, 1);
        assert!(!repo.find_by_id(1).await.unwrap().unwrap().activated);
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_activate_inactive_record() {
        let repo = CountingRepository::seeded();

        let updated = set_activation(&repo, 2, true).await.unwrap();

        assert!(updated.activated);
    }

    #[tokio::test]
    async fn test_same_state_is_conflict_and_not_saved() {
        let repo = CountingRepository::seeded();

        let result = set_activation(&repo, 1, true).await;

        assert_eq!(
            result,
            Err(ServiceError::StateConflict {
                id: 1,
                activated: true
            })
        );
        assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
        assert!(repo.find_by_id(1).await.unwrap().unwrap().activated);
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let repo = CountingRepository::seeded();

        for desired in [true, false] {
            let result = set_activation(&repo, 404, desired).await;
            assert_eq!(result, Err(ServiceError::NotFound(404)));
        }
        assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_save_failure_is_propagated_unchanged() {
        let underlying = RepositoryError::ConnectionFailed("write timeout".to_string());
        let repo = CountingRepository {
            save_error: Some(underlying.clone()),
            ..CountingRepository::seeded()
        };

        let result = set_activation(&repo, 2, true).await;

        assert_eq!(result, Err(underlying.into()));
    }
}
