//! HTTP handlers for offer endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::dto::{ErrorResponse, MessageResponse, Pagination};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::domain::foundation::{DomainError, OfferId};
use crate::domain::offer::{AccessRuleSet, NewOffer, OfferError, OfferUpdate};
use crate::ports::OfferRepository;

use super::dto::{CreateOfferRequest, OfferResponse, UpdateOfferRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (public)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /offers - List offers
pub async fn list_offers(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<impl IntoResponse, OfferApiError> {
    let (skip, limit) = page.bounds();
    let offers = state.offers.list(skip, limit).await?;
    let body: Vec<OfferResponse> = offers.iter().map(OfferResponse::from).collect();
    Ok(Json(body))
}

/// GET /offers/{id} - Get one offer
pub async fn get_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
) -> Result<impl IntoResponse, OfferApiError> {
    let id = OfferId::new(offer_id);
    let offer = state
        .offers
        .find_by_id(id)
        .await?
        .ok_or_else(|| OfferError::not_found(id))?;
    Ok(Json(OfferResponse::from(offer)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (authenticated)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /offers - Create an offer
pub async fn create_offer(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateOfferRequest>,
) -> Result<impl IntoResponse, OfferApiError> {
    let rules = parse_rule_ids(request.access_rule_ids)?.unwrap_or_default();
    let new_offer = NewOffer::new(
        request.title,
        request.description,
        request.price,
        request.benefits,
        rules,
    )?;

    let offer = state.offers.create(&new_offer).await?;
    tracing::info!(offer_id = %offer.id, created_by = %user.id, "Offer created");
    Ok(Json(OfferResponse::from(offer)))
}

/// PATCH /offers/{id} - Partially update an offer
pub async fn update_offer(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(offer_id): Path<i64>,
    Json(request): Json<UpdateOfferRequest>,
) -> Result<impl IntoResponse, OfferApiError> {
    let id = OfferId::new(offer_id);
    let mut offer = state
        .offers
        .find_by_id(id)
        .await?
        .ok_or_else(|| OfferError::not_found(id))?;

    let update = OfferUpdate::new(
        request.title,
        request.description,
        request.price,
        request.benefits,
        parse_rule_ids(request.access_rule_ids)?,
    )?;

    if !update.is_empty() {
        update.apply_to(&mut offer);
        state.offers.update(&offer).await?;
        tracing::info!(offer_id = %offer.id, updated_by = %user.id, "Offer updated");
    }

    Ok(Json(OfferResponse::from(offer)))
}

/// DELETE /offers/{id} - Delete an offer nobody references
pub async fn delete_offer(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(offer_id): Path<i64>,
) -> Result<impl IntoResponse, OfferApiError> {
    let id = OfferId::new(offer_id);
    state.offers.delete(id).await?;
    tracing::info!(offer_id = %id, deleted_by = %user.id, "Offer deleted");
    Ok(Json(MessageResponse::new("Offer deleted successfully")))
}

fn parse_rule_ids(ids: Option<Vec<i32>>) -> Result<Option<AccessRuleSet>, OfferError> {
    Ok(ids.map(|ids| AccessRuleSet::from_catalog_ids(&ids)).transpose()?)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts offer errors to HTTP responses.
#[derive(Debug)]
pub struct OfferApiError(OfferError);

impl From<OfferError> for OfferApiError {
    fn from(err: OfferError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for OfferApiError {
    fn from(err: DomainError) -> Self {
        Self(OfferError::from(err))
    }
}

impl From<crate::domain::foundation::ValidationError> for OfferApiError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        Self(OfferError::from(err))
    }
}

impl IntoResponse for OfferApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            OfferError::NotFound(_) => StatusCode::NOT_FOUND,
            OfferError::InUse(_) => StatusCode::CONFLICT,
            OfferError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            OfferError::Infrastructure(msg) => {
                tracing::error!("Offer request failed: {}", msg);
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
