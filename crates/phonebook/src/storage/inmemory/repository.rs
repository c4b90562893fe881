//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use phonebook_core::phone::{CustomerId, PageRequest, PhoneNumber, PhoneNumberId};
use phonebook_core::storage::{PhoneNumberRepository, Result};

/// In-memory storage backend.
///
/// Uses a `BTreeMap` wrapped in `Arc<RwLock<_>>` for thread-safe access,
/// so pages come out ordered by ID. Data is not persisted and will be lost
/// when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    phone_numbers: Arc<RwLock<BTreeMap<PhoneNumberId, PhoneNumber>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given records.
    pub fn with_phone_numbers(phone_numbers: impl IntoIterator<Item = PhoneNumber>) -> Self {
        let map = phone_numbers.into_iter().map(|p| (p.id, p)).collect();
        Self {
            phone_numbers: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl PhoneNumberRepository for InMemoryRepository {
    async fn count(&self) -> Result<u64> {
        let phone_numbers = self.phone_numbers.read().await;
        Ok(phone_numbers.len() as u64)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Vec<PhoneNumber>> {
        let phone_numbers = self.phone_numbers.read().await;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        Ok(phone_numbers
            .values()
            .skip(skip)
            .take(request.size as usize)
            .cloned()
            .collect())
    }

    async fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<PhoneNumber>> {
        let phone_numbers = self.phone_numbers.read().await;
        Ok(phone_numbers
            .values()
            .filter(|p| p.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: PhoneNumberId) -> Result<Option<PhoneNumber>> {
        let phone_numbers = self.phone_numbers.read().await;
        Ok(phone_numbers.get(&id).cloned())
    }

    async fn save(&self, record: &PhoneNumber) -> Result<PhoneNumber> {
        let mut phone_numbers = self.phone_numbers.write().await;
        phone_numbers.insert(record.id, record.clone());
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_core::phone::generate_seed_phone_numbers;

    fn seeded() -> InMemoryRepository {
        InMemoryRepository::with_phone_numbers(generate_seed_phone_numbers())
    }

    #[tokio::test]
    async fn test_count() {
        assert_eq!(seeded().count().await.unwrap(), 5);
        assert_eq!(InMemoryRepository::new().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_page_is_ordered_by_id() {
        let repo = seeded();

        let first = repo.find_page(PageRequest::new(0, 3).unwrap()).await.unwrap();
        let second = repo.find_page(PageRequest::new(1, 3).unwrap()).await.unwrap();

        let first_ids: Vec<_> = first.iter().map(|p| p.id).collect();
        let second_ids: Vec<_> = second.iter().map(|p| p.id).collect();
        assert_eq!(first_ids, vec![1, 2, 3]);
        assert_eq!(second_ids, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_find_page_beyond_data_is_empty() {
        let repo = seeded();

        let page = repo.find_page(PageRequest::new(9, 3).unwrap()).await.unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_customer() {
        let repo = seeded();

        let phones = repo.find_by_customer(2).await.unwrap();

        assert_eq!(phones.len(), 2);
        assert!(phones.iter().all(|p| p.customer_id == 2));
        assert!(repo.find_by_customer(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = seeded();

        assert_eq!(repo.find_by_id(3).await.unwrap().map(|p| p.id), Some(3));
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_updates_existing_record() {
        let repo = seeded();
        let mut phone = repo.find_by_id(2).await.unwrap().unwrap();
        phone.activated = true;

        let saved = repo.save(&phone).await.unwrap();

        assert!(saved.activated);
        assert!(repo.find_by_id(2).await.unwrap().unwrap().activated);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_save_inserts_new_record() {
        let repo = InMemoryRepository::new();

        repo.save(&PhoneNumber::new(10, "0400000000", 7)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
