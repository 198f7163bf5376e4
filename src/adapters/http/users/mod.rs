//! HTTP adapter for user management endpoints.
//!
//! - `POST /users`, `GET /users`
//! - `GET /users/{id}`, `PATCH /users/{id}`, `DELETE /users/{id}`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::UserResponse;
pub use handlers::UserApiError;
pub use routes::user_routes;
