//! Subscription handlers.
//!
//! Both handlers reload the user, run the domain transition and commit the
//! resulting state with a single repository write.

mod subscribe;
mod unsubscribe;

pub use subscribe::{SubscribeCommand, SubscribeHandler, SubscribeResult};
pub use unsubscribe::{UnsubscribeCommand, UnsubscribeHandler, UnsubscribeResult};
