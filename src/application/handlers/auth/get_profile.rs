//! GetProfileHandler - Query handler for the acting user's profile.

use std::sync::Arc;

use crate::domain::foundation::{OfferId, UserId};
use crate::domain::offer::Offer;
use crate::domain::user::{User, UserError};
use crate::ports::{OfferRepository, UserRepository};

/// Query for a user's profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

/// A user together with the offers its subscription state points at.
///
/// An offer id that no longer resolves is reported as `None`.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub user: User,
    pub offer: Option<Offer>,
    pub previous_offer: Option<Offer>,
}

/// Handler for loading profiles.
pub struct GetProfileHandler {
    users: Arc<dyn UserRepository>,
    offers: Arc<dyn OfferRepository>,
}

impl GetProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>, offers: Arc<dyn OfferRepository>) -> Self {
        Self { users, offers }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<ProfileView, UserError> {
        let user = self
            .users
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(query.user_id))?;

        let offer = self.resolve(user.current_offer()).await?;
        let previous_offer = self.resolve(user.previous_offer()).await?;

        Ok(ProfileView {
            user,
            offer,
            previous_offer,
        })
    }

    async fn resolve(&self, id: Option<OfferId>) -> Result<Option<Offer>, UserError> {
        match id {
            Some(id) => Ok(self.offers.find_by_id(id).await?),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryOfferRepository, InMemoryUserRepository};
    use crate::domain::subscription::SubscriptionState;
    use crate::domain::user::{Age, Email, Gender, NewUser, PersonName};

    async fn setup(state: SubscriptionState) -> (GetProfileHandler, UserId) {
        let users = Arc::new(InMemoryUserRepository::new());
        let user = users
            .create(&NewUser {
                email: Email::new("ada@example.com").unwrap(),
                firstname: PersonName::new("firstname", "Ada").unwrap(),
                lastname: PersonName::new("lastname", "Lovelace").unwrap(),
                age: Age::new(36).unwrap(),
                gender: Gender::Female,
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        users.save_subscription(user.id, &state).await.unwrap();

        let handler =
            GetProfileHandler::new(users, Arc::new(InMemoryOfferRepository::with_catalog().unwrap()));
        (handler, user.id)
    }

    #[tokio::test]
    async fn resolves_current_and_previous_offers() {
        let (handler, user_id) =
            setup(SubscriptionState::new(Some(OfferId::new(3)), Some(OfferId::new(1)))).await;

        let view = handler.handle(GetProfileQuery { user_id }).await.unwrap();

        assert_eq!(view.offer.unwrap().title, "Offre Premium");
        assert_eq!(view.previous_offer.unwrap().title, "Offre Starter");
    }

    #[tokio::test]
    async fn fresh_user_has_no_offers() {
        let (handler, user_id) = setup(SubscriptionState::default()).await;

        let view = handler.handle(GetProfileQuery { user_id }).await.unwrap();

        assert!(view.offer.is_none());
        assert!(view.previous_offer.is_none());
    }

    #[tokio::test]
    async fn dangling_offer_reference_resolves_to_none() {
        let (handler, user_id) = setup(SubscriptionState::new(Some(OfferId::new(42)), None)).await;

        let view = handler.handle(GetProfileQuery { user_id }).await.unwrap();

        assert!(view.offer.is_none());
        assert_eq!(view.user.current_offer(), Some(OfferId::new(42)));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (handler, _) = setup(SubscriptionState::default()).await;

        let err = handler
            .handle(GetProfileQuery {
                user_id: UserId::new(999),
            })
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound(UserId::new(999)));
    }
}
