//! Axum router configuration for authentication endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{login, logout, me, signup};

/// Create the authentication router.
///
/// # Routes
/// - `POST /signup` - Register
/// - `POST /login` - Log in (sets the session cookie)
/// - `POST /logout` - Log out (revokes the token)
/// - `GET /me` - Current user's profile (authenticated)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}
