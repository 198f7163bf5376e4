//! Subscription domain module.
//!
//! Decides whether a user may take an offer and applies the resulting
//! state transitions.
//!
//! # Module Structure
//!
//! - `state` - Current/previous offer pair held by each user
//! - `eligibility` - Pure access-rule evaluation
//! - `transition` - Subscribe and unsubscribe
//! - `errors` - Transition errors

pub mod eligibility;
mod errors;
mod state;
mod transition;

pub use eligibility::is_accessible;
pub use errors::SubscriptionError;
pub use state::SubscriptionState;
pub use transition::{ensure_subscribed_to, subscribe, unsubscribe, Subscribed, Unsubscribed};
