//! Supersub - Subscription management backend.
//!
//! Users subscribe to offers whose access rules decide who may take them:
//! first-time subscribers, returning subscribers, or users switching from
//! another offer. The crate follows a ports-and-adapters layout.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
