//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with `dto`, `handlers` and `routes`;
//! `router::app_router` assembles them behind the shared layers.

pub mod auth;
pub mod dto;
pub mod middleware;
pub mod offers;
pub mod router;
pub mod state;
pub mod subscription;
pub mod users;

// Re-export key types for convenience
pub use router::app_router;
pub use state::{AppState, SessionCookie};
