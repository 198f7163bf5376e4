//! Offer-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | InUse | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, OfferId, ValidationError};

/// Offer management errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferError {
    /// Offer was not found.
    NotFound(OfferId),

    /// Offer is still referenced by at least one user.
    InUse(OfferId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl OfferError {
    pub fn not_found(id: OfferId) -> Self {
        OfferError::NotFound(id)
    }

    pub fn in_use(id: OfferId) -> Self {
        OfferError::InUse(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        OfferError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        OfferError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OfferError::NotFound(_) => ErrorCode::OfferNotFound,
            OfferError::InUse(_) => ErrorCode::OfferInUse,
            OfferError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            OfferError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            OfferError::NotFound(_) => "Offer not found".to_string(),
            OfferError::InUse(id) => {
                format!("Offer {} is still referenced by subscribers", id)
            }
            OfferError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            OfferError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OfferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OfferError {}

impl From<ValidationError> for OfferError {
    fn from(err: ValidationError) -> Self {
        OfferError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for OfferError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::OfferNotFound | ErrorCode::OfferInUse => {
                let id = err
                    .detail("offer_id")
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(OfferId::new(0));
                if err.code == ErrorCode::OfferNotFound {
                    OfferError::NotFound(id)
                } else {
                    OfferError::InUse(id)
                }
            }
            ErrorCode::ValidationFailed => OfferError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => OfferError::Infrastructure(err.to_string()),
        }
    }
}

impl From<OfferError> for DomainError {
    fn from(err: OfferError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            OfferError::NotFound(id) | OfferError::InUse(id) => {
                domain.with_detail("offer_id", id.to_string())
            }
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_stable() {
        let err = OfferError::not_found(OfferId::new(9));
        assert_eq!(err.message(), "Offer not found");
        assert_eq!(err.code(), ErrorCode::OfferNotFound);
    }

    #[test]
    fn in_use_maps_to_its_own_code() {
        assert_eq!(OfferError::in_use(OfferId::new(1)).code(), ErrorCode::OfferInUse);
    }

    #[test]
    fn domain_error_round_trip_keeps_offer_id() {
        let domain: DomainError = OfferError::in_use(OfferId::new(3)).into();
        let back = OfferError::from(domain);
        assert_eq!(back, OfferError::InUse(OfferId::new(3)));
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err = OfferError::from(DomainError::database("connection reset"));
        assert!(matches!(err, OfferError::Infrastructure(_)));
    }

    #[test]
    fn validation_error_keeps_field() {
        let err = OfferError::from(ValidationError::empty_field("title"));
        assert!(matches!(err, OfferError::ValidationFailed { ref field, .. } if field == "title"));
    }
}
