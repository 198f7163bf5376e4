//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the HTTP middleware injects into a request
//! after a session token has been validated and its user resolved. It has
//! no dependency on the token format; the `SessionValidator` port decides
//! how a token maps to a user id.

use super::UserId;
use thiserror::Error;

/// User resolved from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user's primary key.
    pub id: UserId,

    /// The user's email address.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during login or token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No token was presented.
    #[error("Not authenticated")]
    MissingToken,

    /// The token is malformed or has an invalid signature.
    #[error("Could not validate credentials")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token was revoked by a logout.
    #[error("Token has been revoked")]
    TokenRevoked,

    /// Email/password pair did not match a user.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Token is valid but the user no longer exists.
    #[error("User not found")]
    UserNotFound,

    /// A collaborator (hasher, token signer, store) failed.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken
                | AuthError::InvalidToken
                | AuthError::TokenExpired
                | AuthError::TokenRevoked
                | AuthError::UserNotFound
        )
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_keeps_id_and_email() {
        let user = AuthenticatedUser::new(UserId::new(5), "ada@example.com");
        assert_eq!(user.id, UserId::new(5));
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn token_problems_require_reauthentication() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(AuthError::TokenRevoked.requires_reauthentication());
        assert!(!AuthError::InvalidCredentials.requires_reauthentication());
    }

    #[test]
    fn only_service_unavailable_is_transient() {
        assert!(AuthError::service_unavailable("redis down").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
    }

    #[test]
    fn invalid_credentials_message_matches_login_contract() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Incorrect email or password"
        );
    }
}
