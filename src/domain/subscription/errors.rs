//! Subscription transition errors.
//!
//! Every variant is terminal for the request; state is only written once
//! all preconditions have passed.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | OfferNotFound | 404 |
//! | NotAccessible | 403 |
//! | NotSubscribed | 400 |
//! | CurrentOfferMissing | 404 |
//! | UserNotFound | 404 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, OfferId, UserId};

/// Errors raised while subscribing or unsubscribing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The requested offer does not exist.
    OfferNotFound(OfferId),

    /// The user's history satisfies none of the offer's rules.
    NotAccessible(OfferId),

    /// Unsubscribe requested for an offer the user does not hold.
    NotSubscribed {
        requested: OfferId,
        current: Option<OfferId>,
    },

    /// The user's current offer no longer resolves.
    CurrentOfferMissing(OfferId),

    /// The acting user no longer exists.
    UserNotFound(UserId),

    /// Infrastructure error.
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn offer_not_found(id: OfferId) -> Self {
        SubscriptionError::OfferNotFound(id)
    }

    pub fn not_accessible(id: OfferId) -> Self {
        SubscriptionError::NotAccessible(id)
    }

    pub fn not_subscribed(requested: OfferId, current: Option<OfferId>) -> Self {
        SubscriptionError::NotSubscribed { requested, current }
    }

    pub fn current_offer_missing(id: OfferId) -> Self {
        SubscriptionError::CurrentOfferMissing(id)
    }

    pub fn user_not_found(id: UserId) -> Self {
        SubscriptionError::UserNotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubscriptionError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::OfferNotFound(_) | SubscriptionError::CurrentOfferMissing(_) => {
                ErrorCode::OfferNotFound
            }
            SubscriptionError::NotAccessible(_) => ErrorCode::OfferNotAccessible,
            SubscriptionError::NotSubscribed { .. } => ErrorCode::NotSubscribed,
            SubscriptionError::UserNotFound(_) => ErrorCode::UserNotFound,
            SubscriptionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::OfferNotFound(_) => "Offer not found".to_string(),
            SubscriptionError::NotAccessible(_) => {
                "You do not have access to this offer based on the current access rules".to_string()
            }
            SubscriptionError::NotSubscribed { .. } => {
                "You are not currently subscribed to this offer".to_string()
            }
            SubscriptionError::CurrentOfferMissing(_) => "Current offer not found".to_string(),
            SubscriptionError::UserNotFound(_) => "User not found".to_string(),
            SubscriptionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubscriptionError::Infrastructure(_))
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        SubscriptionError::Infrastructure(err.to_string())
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
