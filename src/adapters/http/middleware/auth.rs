//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that resolves the session token and injects the user
//! - `RequireAuth` - Extractor that requires authentication
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The token is read from the session cookie first, then from an
//! `Authorization: Bearer` header. Requests with a bad token continue
//! without a user, so public routes keep working; protected routes reject
//! them through `RequireAuth`. When the user store cannot be reached the
//! request is marked with `SessionUnavailable` and protected routes answer
//! 500 instead of 401.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::adapters::http::dto::ErrorResponse;
use crate::adapters::http::AppState;
use crate::domain::foundation::{AuthError, AuthenticatedUser, ErrorCode};
use crate::ports::{SessionValidator, TokenBlacklist, UserRepository};

/// Pull the raw session token out of the request.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let from_cookie = CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty());

    from_cookie.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_string)
    })
}

/// Resolve a token to a live user.
///
/// A blacklist outage is treated as "not revoked".
pub async fn authenticate(state: &AppState, token: &str) -> Result<AuthenticatedUser, AuthError> {
    match state.blacklist.is_revoked(token).await {
        Ok(true) => return Err(AuthError::TokenRevoked),
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Token blacklist unavailable; accepting token unchecked");
        }
    }

    let claims = state.sessions.validate(token).await?;

    let user = state
        .users
        .find_by_id(claims.user_id)
        .await
        .map_err(|e| AuthError::service_unavailable(e.to_string()))?
        .ok_or(AuthError::UserNotFound)?;

    Ok(AuthenticatedUser::new(user.id, user.email.as_str()))
}

/// Marker left in request extensions when the session could not be
/// resolved because a backing store failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUnavailable;

/// Authentication middleware.
///
/// On success injects `AuthenticatedUser` into request extensions; on any
/// failure the request continues unauthenticated.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_token(request.headers(), &state.cookie.name) {
        match authenticate(&state, &token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(AuthError::ServiceUnavailable(msg)) => {
                tracing::error!("Auth service unavailable: {}", msg);
                request.extensions_mut().insert(SessionUnavailable);
            }
            Err(e) => {
                tracing::warn!(reason = %e, "Rejected session token");
            }
        }
    }

    next.run(request).await
}

/// Extractor that requires authentication.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(RequireAuth(user.clone()));
        }
        if parts.extensions.get::<SessionUnavailable>().is_some() {
            return Err(AuthRejection::ServiceUnavailable);
        }
        Err(AuthRejection::Unauthenticated)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
    /// The token could not be checked because a store was down.
    ServiceUnavailable,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorResponse::new(
                    ErrorCode::Unauthorized.to_string(),
                    AuthError::InvalidToken.to_string(),
                )),
            )
                .into_response(),
            AuthRejection::ServiceUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    ErrorCode::InternalError.to_string(),
                    "Internal server error",
                )),
            )
                .into_response(),
        }
    }
}
