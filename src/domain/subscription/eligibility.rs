//! Offer eligibility evaluation.
//!
//! An offer is accessible when its rule set is empty or when at least one
//! of its rules matches the user's subscription state:
//!
//! | Rule | Matches when |
//! |------|--------------|
//! | `FIRST_SUB` | no current offer and no previous offer |
//! | `RENEW_SUB` | a previous offer and no current offer |
//! | `SWITCH_SUB` | a current offer different from the evaluated one |
//!
//! `RENEW_SUB` does not require the previous offer to be the evaluated
//! offer: any returning subscriber qualifies for any renewable offer.

use crate::domain::foundation::OfferId;
use crate::domain::offer::{AccessRule, Offer};

use super::SubscriptionState;

/// Returns true if a user in `state` may subscribe to `offer`.
pub fn is_accessible(offer: &Offer, state: &SubscriptionState) -> bool {
    offer.access_rules.is_empty() || matching_rule(offer, state).is_some()
}

/// Returns the first rule on `offer` (in catalog order) satisfied by `state`.
pub fn matching_rule(offer: &Offer, state: &SubscriptionState) -> Option<AccessRule> {
    offer
        .access_rules
        .iter()
        .find(|rule| rule_matches(*rule, offer.id, state))
}

/// Evaluates a single rule against the state for the given target offer.
pub fn rule_matches(rule: AccessRule, target: OfferId, state: &SubscriptionState) -> bool {
    match rule {
        AccessRule::FirstSub => state.current_offer.is_none() && state.previous_offer.is_none(),
        AccessRule::RenewSub => state.previous_offer.is_some() && state.current_offer.is_none(),
        AccessRule::SwitchSub => matches!(state.current_offer, Some(current) if current != target),
    }
}
