//! Subscription history carried by every user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OfferId;

/// The offer a user holds now and the one they held before it.
///
/// Both slots are independent; either, both or neither may be set, and
/// they may name the same offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionState {
    pub current_offer: Option<OfferId>,
    pub previous_offer: Option<OfferId>,
}

impl SubscriptionState {
    pub fn new(current_offer: Option<OfferId>, previous_offer: Option<OfferId>) -> Self {
        Self {
            current_offer,
            previous_offer,
        }
    }

    /// True if the user has never held any offer.
    pub fn is_fresh(&self) -> bool {
        self.current_offer.is_none() && self.previous_offer.is_none()
    }

    /// True if the user currently holds `offer`.
    pub fn is_subscribed_to(&self, offer: OfferId) -> bool {
        self.current_offer == Some(offer)
    }

    /// Moves to `offer`, pushing any current offer into the previous slot.
    ///
    /// With no current offer the previous slot is left as it was.
    pub(crate) fn switch_to(&mut self, offer: OfferId) {
        if let Some(current) = self.current_offer {
            self.previous_offer = Some(current);
        }
        self.current_offer = Some(offer);
    }

    /// Drops the current offer into the previous slot.
    pub(crate) fn release(&mut self) {
        self.previous_offer = self.current_offer.take();
    }
}
