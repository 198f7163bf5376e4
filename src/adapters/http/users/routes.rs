//! Axum router configuration for user endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers::{create_user, delete_user, get_user, list_users, update_user};

/// Create the user API router. Every route requires authentication.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:user_id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}
