//! User repository port.
//!
//! Profile writes and subscription writes are separate operations: only
//! subscription transitions call `save_subscription`, and `update_profile`
//! never touches the offer columns.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::SubscriptionState;
use crate::domain::user::{Email, NewUser, User};

/// Repository port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by (normalized) email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// List users ordered by id.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, DomainError>;

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// - `EmailAlreadyRegistered` if the email is taken
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Persist profile fields (not subscription fields).
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    /// - `EmailAlreadyRegistered` if the new email is taken
    /// - `DatabaseError` on persistence failure
    async fn update_profile(&self, user: &User) -> Result<(), DomainError>;

    /// Commit a subscription transition in a single write.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn save_subscription(
        &self,
        id: UserId,
        state: &SubscriptionState,
    ) -> Result<(), DomainError>;

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
}
