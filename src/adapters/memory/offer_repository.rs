//! In-memory offer repository.
//!
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OfferId};
use crate::domain::offer::{default_catalog, NewOffer, Offer, OfferError};
use crate::ports::OfferRepository;

use super::InMemoryUserRepository;

#[derive(Debug, Default)]
struct OfferTable {
    rows: BTreeMap<OfferId, Offer>,
    next_id: i64,
}

/// In-memory storage for offers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfferRepository {
    table: Arc<RwLock<OfferTable>>,
    users: Option<InMemoryUserRepository>,
}

impl InMemoryOfferRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with the default catalog (ids 1, 2, 3).
    pub fn with_catalog() -> Result<Self, DomainError> {
        let mut table = OfferTable::default();
        for offer in default_catalog()? {
            table.next_id += 1;
            let id = OfferId::new(table.next_id);
            table.rows.insert(id, offer.into_offer(id));
        }
        Ok(Self {
            table: Arc::new(RwLock::new(table)),
            users: None,
        })
    }

    /// Refuse deletes of offers that users in `users` still reference.
    pub fn guarded_by(mut self, users: InMemoryUserRepository) -> Self {
        self.users = Some(users);
        self
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn find_by_id(&self, id: OfferId) -> Result<Option<Offer>, DomainError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Offer>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn create(&self, offer: &NewOffer) -> Result<Offer, DomainError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = OfferId::new(table.next_id);
        let created = offer.clone().into_offer(id);
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, offer: &Offer) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&offer.id) {
            Some(existing) => {
                *existing = offer.clone();
                Ok(())
            }
            None => Err(OfferError::not_found(offer.id).into()),
        }
    }

    async fn delete(&self, id: OfferId) -> Result<(), DomainError> {
        if let Some(users) = &self.users {
            if users.references_offer(id).await {
                return Err(OfferError::in_use(id).into());
            }
        }
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(OfferError::not_found(id).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::offer::{AccessRule, AccessRuleSet};

    #[tokio::test]
    async fn catalog_is_loaded_with_sequential_ids() {
        let repo = InMemoryOfferRepository::with_catalog().unwrap();

        let offers = repo.list(0, 100).await.unwrap();

        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0].id, OfferId::new(1));
        assert_eq!(offers[2].title, "Offre Premium");
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let repo = InMemoryOfferRepository::with_catalog().unwrap();
        let new_offer = NewOffer::new("Flex", "", 5, "", AccessRuleSet::from([AccessRule::RenewSub])).unwrap();

        let created = repo.create(&new_offer).await.unwrap();

        assert_eq!(created.id, OfferId::new(4));
        assert_eq!(repo.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn list_honours_skip_and_limit() {
        let repo = InMemoryOfferRepository::with_catalog().unwrap();

        let offers = repo.list(1, 1).await.unwrap();

        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].id, OfferId::new(2));
    }

    #[tokio::test]
    async fn update_missing_offer_is_not_found() {
        let repo = InMemoryOfferRepository::new();
        let offer = NewOffer::new("Ghost", "", 5, "", AccessRuleSet::empty())
            .unwrap()
            .into_offer(OfferId::new(99));

        let err = repo.update(&offer).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OfferNotFound);
    }

    #[tokio::test]
    async fn delete_removes_offer() {
        let repo = InMemoryOfferRepository::with_catalog().unwrap();

        repo.delete(OfferId::new(2)).await.unwrap();

        assert!(repo.find_by_id(OfferId::new(2)).await.unwrap().is_none());
        assert_eq!(
            repo.delete(OfferId::new(2)).await.unwrap_err().code,
            ErrorCode::OfferNotFound
        );
    }
}
