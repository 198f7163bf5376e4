//! Axum router configuration for subscription endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::AppState;

use super::handlers::{subscribe_to, unsubscribe_from};

/// Create the subscription API router.
///
/// # Routes
/// - `POST /subscribeTo` - Subscribe to an offer
/// - `POST /unsubscribeTo` - Leave the current offer
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribeTo", post(subscribe_to))
        .route("/unsubscribeTo", post(unsubscribe_from))
}
