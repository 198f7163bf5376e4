//! HTTP handlers for subscription endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::dto::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::{SubscribeCommand, UnsubscribeCommand};
use crate::domain::foundation::OfferId;
use crate::domain::subscription::SubscriptionError;

use super::dto::{SubscribeRequest, SubscribeResponse, UnsubscribeRequest, UnsubscribeResponse};

/// POST /subscription/subscribeTo - Subscribe the current user to an offer
pub async fn subscribe_to(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SubscribeRequest>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let result = state
        .subscribe_handler()
        .handle(SubscribeCommand {
            user_id: user.id,
            offer_id: OfferId::new(request.offer_id),
        })
        .await?;

    Ok(Json(SubscribeResponse::from(result.subscribed)))
}

/// POST /subscription/unsubscribeTo - Leave the current offer
pub async fn unsubscribe_from(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<UnsubscribeRequest>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let result = state
        .unsubscribe_handler()
        .handle(UnsubscribeCommand {
            user_id: user.id,
            offer_id: OfferId::new(request.offer_id),
        })
        .await?;

    Ok(Json(UnsubscribeResponse::from(result.unsubscribed)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts subscription errors to HTTP responses.
#[derive(Debug)]
pub struct SubscriptionApiError(SubscriptionError);

impl From<SubscriptionError> for SubscriptionApiError {
    fn from(err: SubscriptionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SubscriptionApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            SubscriptionError::OfferNotFound(_)
            | SubscriptionError::CurrentOfferMissing(_)
            | SubscriptionError::UserNotFound(_) => StatusCode::NOT_FOUND,
            SubscriptionError::NotAccessible(_) => StatusCode::FORBIDDEN,
            SubscriptionError::NotSubscribed { .. } => StatusCode::BAD_REQUEST,
            SubscriptionError::Infrastructure(msg) => {
                tracing::error!("Subscription request failed: {}", msg);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("INTERNAL_ERROR", "Internal server error")),
                )
                    .into_response();
            }
        };

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn status_of(err: SubscriptionError) -> StatusCode {
        SubscriptionApiError(err).into_response().status()
    }

    #[test]
    fn api_error_maps_missing_offer_to_404() {
        assert_eq!(
            status_of(SubscriptionError::offer_not_found(OfferId::new(9))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(SubscriptionError::current_offer_missing(OfferId::new(9))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn api_error_maps_ineligible_to_403() {
        assert_eq!(
            status_of(SubscriptionError::not_accessible(OfferId::new(1))),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn api_error_maps_mismatched_unsubscribe_to_400() {
        assert_eq!(
            status_of(SubscriptionError::not_subscribed(OfferId::new(2), Some(OfferId::new(1)))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn api_error_maps_vanished_user_to_404() {
        assert_eq!(
            status_of(SubscriptionError::user_not_found(UserId::new(3))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn api_error_maps_infrastructure_to_500() {
        assert_eq!(
            status_of(SubscriptionError::infrastructure("db down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
