//! SubscribeHandler - Command handler for subscribing to an offer.

use std::sync::Arc;

use crate::domain::foundation::{OfferId, UserId};
use crate::domain::subscription::{self, Subscribed, SubscriptionError, SubscriptionState};
use crate::ports::{OfferRepository, UserRepository};

/// Command to subscribe the acting user to an offer.
#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    pub user_id: UserId,
    pub offer_id: OfferId,
}

/// Result of a successful subscription.
#[derive(Debug, Clone)]
pub struct SubscribeResult {
    pub subscribed: Subscribed,
    pub subscription: SubscriptionState,
}

/// Handler for subscribing to offers.
pub struct SubscribeHandler {
    users: Arc<dyn UserRepository>,
    offers: Arc<dyn OfferRepository>,
}

impl SubscribeHandler {
    pub fn new(users: Arc<dyn UserRepository>, offers: Arc<dyn OfferRepository>) -> Self {
        Self { users, offers }
    }

    pub async fn handle(&self, cmd: SubscribeCommand) -> Result<SubscribeResult, SubscriptionError> {
        // 1. Load the user as currently stored
        let mut user = self
            .users
            .find_by_id(cmd.user_id)
            .await?
            .ok_or_else(|| SubscriptionError::user_not_found(cmd.user_id))?;

        // 2. Resolve the target offer with its rules
        let offer = self
            .offers
            .find_by_id(cmd.offer_id)
            .await?
            .ok_or_else(|| SubscriptionError::offer_not_found(cmd.offer_id))?;

        // 3. Evaluate eligibility and apply the transition
        let subscribed = subscription::subscribe(&mut user, &offer).map_err(|e| {
            tracing::debug!(
                user_id = %cmd.user_id,
                offer_id = %cmd.offer_id,
                current = ?user.current_offer(),
                previous = ?user.previous_offer(),
                "Offer not accessible"
            );
            e
        })?;

        // 4. Commit
        self.users
            .save_subscription(user.id, &user.subscription)
            .await?;

        tracing::info!(
            user_id = %user.id,
            offer_id = %offer.id,
            previous_offer = ?user.previous_offer(),
            "User subscribed to offer"
        );

        Ok(SubscribeResult {
            subscribed,
            subscription: user.subscription,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryOfferRepository, InMemoryUserRepository};
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::user::{Age, Email, Gender, NewUser, PersonName, User};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FailingSaveRepository {
        inner: InMemoryUserRepository,
        saves: Mutex<u32>,
    }

    #[async_trait]
    impl UserRepository for FailingSaveRepository {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.inner.find_by_id(id).await
        }

        async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
            self.inner.find_by_email(email).await
        }

        async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, DomainError> {
            self.inner.list(skip, limit).await
        }

        async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
            self.inner.create(user).await
        }

        async fn update_profile(&self, user: &User) -> Result<(), DomainError> {
            self.inner.update_profile(user).await
        }

        async fn save_subscription(
            &self,
            _id: UserId,
            _state: &SubscriptionState,
        ) -> Result<(), DomainError> {
            *self.saves.lock().unwrap() += 1;
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated write failure"))
        }

        async fn delete(&self, id: UserId) -> Result<(), DomainError> {
            self.inner.delete(id).await
        }
    }

    fn new_user() -> NewUser {
        NewUser {
            email: Email::new("ada@example.com").unwrap(),
            firstname: PersonName::new("firstname", "Ada").unwrap(),
            lastname: PersonName::new("lastname", "Lovelace").unwrap(),
            age: Age::new(36).unwrap(),
            gender: Gender::Female,
            password_hash: "hash".to_string(),
        }
    }

    async fn setup() -> (SubscribeHandler, Arc<InMemoryUserRepository>, UserId) {
        let users = Arc::new(InMemoryUserRepository::new());
        let offers = Arc::new(InMemoryOfferRepository::with_catalog().unwrap());
        let user = users.create(&new_user()).await.unwrap();
        (SubscribeHandler::new(users.clone(), offers), users, user.id)
    }

    fn cmd(user_id: UserId, offer: i64) -> SubscribeCommand {
        SubscribeCommand {
            user_id,
            offer_id: OfferId::new(offer),
        }
    }

    #[tokio::test]
    async fn fresh_user_subscribes_to_starter() {
        let (handler, users, user_id) = setup().await;

        let result = handler.handle(cmd(user_id, 1)).await.unwrap();

        assert_eq!(result.subscribed.offer_id, OfferId::new(1));
        assert_eq!(result.subscribed.offer_title, "Offre Starter");
        let stored = users.find_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(stored.current_offer(), Some(OfferId::new(1)));
        assert_eq!(stored.previous_offer(), None);
    }

    #[tokio::test]
    async fn switching_moves_current_to_previous() {
        let (handler, users, user_id) = setup().await;

        handler.handle(cmd(user_id, 1)).await.unwrap();
        let result = handler.handle(cmd(user_id, 3)).await.unwrap();

        assert_eq!(
            result.subscription,
            SubscriptionState::new(Some(OfferId::new(3)), Some(OfferId::new(1)))
        );
        let stored = users.find_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(stored.subscription, result.subscription);
    }

    #[tokio::test]
    async fn resubscribing_to_first_sub_offer_is_forbidden() {
        let (handler, users, user_id) = setup().await;
        handler.handle(cmd(user_id, 1)).await.unwrap();

        let err = handler.handle(cmd(user_id, 1)).await.unwrap_err();

        assert_eq!(err, SubscriptionError::NotAccessible(OfferId::new(1)));
        let stored = users.find_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(stored.current_offer(), Some(OfferId::new(1)));
    }

    #[tokio::test]
    async fn unknown_offer_is_not_found() {
        let (handler, _users, user_id) = setup().await;

        let err = handler.handle(cmd(user_id, 99)).await.unwrap_err();
        assert_eq!(err, SubscriptionError::OfferNotFound(OfferId::new(99)));
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        let (handler, _users, _user_id) = setup().await;

        let err = handler.handle(cmd(UserId::new(404), 1)).await.unwrap_err();
        assert_eq!(err, SubscriptionError::UserNotFound(UserId::new(404)));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_infrastructure() {
        let inner = InMemoryUserRepository::new();
        let user = inner.create(&new_user()).await.unwrap();
        let users = Arc::new(FailingSaveRepository {
            inner,
            saves: Mutex::new(0),
        });
        let handler =
            SubscribeHandler::new(users.clone(), Arc::new(InMemoryOfferRepository::with_catalog().unwrap()));

        let err = handler.handle(cmd(user.id, 1)).await.unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(*users.saves.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn rejected_subscription_never_writes() {
        let inner = InMemoryUserRepository::new();
        let user = inner.create(&new_user()).await.unwrap();
        let users = Arc::new(FailingSaveRepository {
            inner,
            saves: Mutex::new(0),
        });
        let handler =
            SubscribeHandler::new(users.clone(), Arc::new(InMemoryOfferRepository::with_catalog().unwrap()));

        let _ = handler.handle(cmd(user.id, 99)).await;

        assert_eq!(*users.saves.lock().unwrap(), 0);
    }
}
