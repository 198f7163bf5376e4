//! Axum router configuration for offer endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers::{create_offer, delete_offer, get_offer, list_offers, update_offer};

/// Create the offer API router.
///
/// # Routes
///
/// ## Public
/// - `GET /` - List offers (`skip`, `limit`)
/// - `GET /{id}` - Get one offer
///
/// ## Authenticated
/// - `POST /` - Create offer
/// - `PATCH /{id}` - Update offer
/// - `DELETE /{id}` - Delete offer
pub fn offer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_offers).post(create_offer))
        .route(
            "/:offer_id",
            get(get_offer).patch(update_offer).delete(delete_offer),
        )
}
