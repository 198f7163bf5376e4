//! HTTP adapter for authentication endpoints.
//!
//! - `POST /auth/signup`
//! - `POST /auth/login`
//! - `POST /auth/logout`
//! - `GET /auth/me`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
