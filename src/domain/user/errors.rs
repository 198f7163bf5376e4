//! User-management error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | EmailAlreadyRegistered | 400 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// User-management errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// User was not found.
    NotFound(UserId),

    /// Another account already uses this email.
    EmailAlreadyRegistered(String),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }

    pub fn email_already_registered(email: impl Into<String>) -> Self {
        UserError::EmailAlreadyRegistered(email.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::EmailAlreadyRegistered(_) => ErrorCode::EmailAlreadyRegistered,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(_) => "User not found".to_string(),
            UserError::EmailAlreadyRegistered(_) => "Email already registered".to_string(),
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UserNotFound => UserError::NotFound(
                err.detail("user_id")
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(UserId::new(0)),
            ),
            ErrorCode::EmailAlreadyRegistered => {
                UserError::EmailAlreadyRegistered(err.detail("email").unwrap_or_default().to_string())
            }
            ErrorCode::ValidationFailed => UserError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

impl From<UserError> for DomainError {
    fn from(err: UserError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            UserError::NotFound(id) => domain.with_detail("user_id", id.to_string()),
            UserError::EmailAlreadyRegistered(email) => domain.with_detail("email", email),
            _ => domain,
        }
    }
}
