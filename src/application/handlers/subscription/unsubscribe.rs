//! UnsubscribeHandler - Command handler for leaving the current offer.

use std::sync::Arc;

use crate::domain::foundation::{OfferId, UserId};
use crate::domain::subscription::{self, SubscriptionError, SubscriptionState, Unsubscribed};
use crate::ports::{OfferRepository, UserRepository};

/// Command to end the acting user's subscription to an offer.
#[derive(Debug, Clone)]
pub struct UnsubscribeCommand {
    pub user_id: UserId,
    pub offer_id: OfferId,
}

/// Result of a successful unsubscription.
#[derive(Debug, Clone)]
pub struct UnsubscribeResult {
    pub unsubscribed: Unsubscribed,
    pub subscription: SubscriptionState,
}

/// Handler for unsubscribing from offers.
pub struct UnsubscribeHandler {
    users: Arc<dyn UserRepository>,
    offers: Arc<dyn OfferRepository>,
}

impl UnsubscribeHandler {
    pub fn new(users: Arc<dyn UserRepository>, offers: Arc<dyn OfferRepository>) -> Self {
        Self { users, offers }
    }

    pub async fn handle(
        &self,
        cmd: UnsubscribeCommand,
    ) -> Result<UnsubscribeResult, SubscriptionError> {
        let mut user = self
            .users
            .find_by_id(cmd.user_id)
            .await?
            .ok_or_else(|| SubscriptionError::user_not_found(cmd.user_id))?;

        // Checked before the lookup so a mismatch is reported even for unknown ids
        subscription::ensure_subscribed_to(&user, cmd.offer_id)?;

        let current = self
            .offers
            .find_by_id(cmd.offer_id)
            .await?
            .ok_or_else(|| SubscriptionError::current_offer_missing(cmd.offer_id))?;

        let unsubscribed = subscription::unsubscribe(&mut user, &current)?;

        self.users
            .save_subscription(user.id, &user.subscription)
            .await?;

        tracing::info!(
            user_id = %user.id,
            offer_id = %current.id,
            "User unsubscribed from offer"
        );

        Ok(UnsubscribeResult {
            unsubscribed,
            subscription: user.subscription,
        })
    }
}
