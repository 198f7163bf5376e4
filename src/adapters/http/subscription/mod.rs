//! HTTP adapter for subscription transitions.
//!
//! - `POST /subscription/subscribeTo`
//! - `POST /subscription/unsubscribeTo`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::subscription_routes;
