//! Subscribe / unsubscribe transitions.
//!
//! Both transitions check every precondition before touching the user, so
//! a failed call leaves the user exactly as it was. Persisting the result
//! is the caller's job.

use serde::Serialize;

use crate::domain::foundation::{OfferId, UserId};
use crate::domain::offer::Offer;
use crate::domain::user::User;

use super::{eligibility, SubscriptionError};

/// Outcome of a successful subscribe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscribed {
    pub user_id: UserId,
    pub offer_id: OfferId,
    pub offer_title: String,
}

/// Outcome of a successful unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unsubscribed {
    pub user_id: UserId,
    pub previous_offer_id: OfferId,
    pub previous_offer_title: String,
}

/// Subscribes `user` to `offer` if the offer's access rules allow it.
///
/// A current offer, if any, becomes the previous offer.
pub fn subscribe(user: &mut User, offer: &Offer) -> Result<Subscribed, SubscriptionError> {
    if !eligibility::is_accessible(offer, &user.subscription) {
        return Err(SubscriptionError::not_accessible(offer.id));
    }

    user.subscription.switch_to(offer.id);

    Ok(Subscribed {
        user_id: user.id,
        offer_id: offer.id,
        offer_title: offer.title.clone(),
    })
}

/// Fails unless `user` currently holds `offer_id`.
pub fn ensure_subscribed_to(user: &User, offer_id: OfferId) -> Result<(), SubscriptionError> {
    if user.subscription.is_subscribed_to(offer_id) {
        Ok(())
    } else {
        Err(SubscriptionError::not_subscribed(offer_id, user.current_offer()))
    }
}

/// Ends the user's subscription to `current`, which becomes the previous offer.
pub fn unsubscribe(user: &mut User, current: &Offer) -> Result<Unsubscribed, SubscriptionError> {
    ensure_subscribed_to(user, current.id)?;

    let previous_offer_title = current.title.clone();
    user.subscription.release();

    Ok(Unsubscribed {
        user_id: user.id,
        previous_offer_id: current.id,
        previous_offer_title,
    })
}
