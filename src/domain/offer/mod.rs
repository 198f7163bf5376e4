//! Offer domain module.
//!
//! Subscription offers and the access rules that decide who may take them.
//!
//! # Module Structure
//!
//! - `access_rule` - Closed rule catalog and per-offer rule sets
//! - `offer` - Offer entity, creation and patch models
//! - `catalog` - Default offers for a fresh store
//! - `errors` - Offer management errors

mod access_rule;
mod catalog;
mod errors;
#[allow(clippy::module_inception)]
mod offer;

pub use access_rule::{AccessRule, AccessRuleSet};
pub use catalog::default_catalog;
pub use errors::OfferError;
pub use offer::{NewOffer, Offer, OfferUpdate, Price, MAX_TITLE_LEN};
