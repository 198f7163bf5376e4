//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, auth types)
//! - `offer` - Offers, access rules and the default catalog
//! - `user` - User accounts and profile values
//! - `subscription` - Eligibility evaluation and subscription transitions

pub mod foundation;
pub mod offer;
pub mod subscription;
pub mod user;
