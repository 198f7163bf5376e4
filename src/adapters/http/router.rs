//! Top-level router: every route module plus the cross-cutting layers.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::auth::auth_routes;
use super::middleware::auth_middleware;
use super::offers::offer_routes;
use super::subscription::subscription_routes;
use super::users::user_routes;
use super::AppState;

/// GET / - Welcome message
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Supersub API" }))
}

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Build the full application router.
///
/// Layer order (outermost first): request id, tracing, request-id
/// propagation, timeout, CORS, then session resolution.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/auth", auth_routes())
        .nest("/subscription", subscription_routes())
        .nest("/offers", offer_routes())
        .nest("/users", user_routes())
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
                .layer(cors_layer(server)),
        )
}

/// CORS for the configured browser origins, with credentials so the
/// session cookie is sent.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}
