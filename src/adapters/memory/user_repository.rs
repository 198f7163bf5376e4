//! In-memory user repository.
//!
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OfferId, UserId};
use crate::domain::subscription::SubscriptionState;
use crate::domain::user::{Email, NewUser, User, UserError};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<UserId, User>,
    next_id: i64,
}

impl UserTable {
    fn email_taken(&self, email: &Email, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|u| &u.email == email && Some(u.id) != except)
    }
}

/// In-memory storage for users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any user holds `offer` as current or previous offer.
    pub async fn references_offer(&self, offer: OfferId) -> bool {
        self.table.read().await.rows.values().any(|u| {
            u.subscription.current_offer == Some(offer) || u.subscription.previous_offer == Some(offer)
        })
    }

    /// Get the number of stored users.
    pub async fn user_count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| &u.email == email).cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;
        if table.email_taken(&user.email, None) {
            return Err(UserError::email_already_registered(user.email.as_str()).into());
        }
        table.next_id += 1;
        let id = UserId::new(table.next_id);
        let created = user.clone().into_user(id);
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update_profile(&self, user: &User) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        if table.email_taken(&user.email, Some(user.id)) {
            return Err(UserError::email_already_registered(user.email.as_str()).into());
        }
        let existing = table
            .rows
            .get_mut(&user.id)
            .ok_or_else(|| DomainError::from(UserError::not_found(user.id)))?;
        let subscription = existing.subscription;
        *existing = User {
            subscription,
            ..user.clone()
        };
        Ok(())
    }

    async fn save_subscription(
        &self,
        id: UserId,
        state: &SubscriptionState,
    ) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        let existing = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::from(UserError::not_found(id)))?;
        existing.subscription = *state;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(UserError::not_found(id).into()),
        }
    }
}
