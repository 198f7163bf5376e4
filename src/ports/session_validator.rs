//! Session token ports.
//!
//! `TokenIssuer` mints a session token at login; `SessionValidator` turns a
//! presented token back into claims. A single adapter usually implements
//! both so that the signing key lives in one place.
//!
//! # Contract
//!
//! Validators must:
//! - Verify the token signature and issuer
//! - Return `AuthError::TokenExpired` for expired tokens
//! - Return `AuthError::InvalidToken` for anything else that fails

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::{AuthError, UserId};

/// Claims extracted from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Seconds until expiry, or zero if already past.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> u64 {
        (self.expires_at - now).num_seconds().max(0) as u64
    }
}

/// A freshly minted session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Validates session tokens.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without any "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// Issues session tokens.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Mint a token for the given user.
    async fn issue(&self, user_id: UserId) -> Result<IssuedToken, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn remaining_secs_counts_down_to_expiry() {
        let now = Utc::now();
        let claims = SessionClaims {
            user_id: UserId::new(1),
            expires_at: now + Duration::minutes(30),
        };
        assert_eq!(claims.remaining_secs(now), 1800);
    }

    #[test]
    fn remaining_secs_is_zero_after_expiry() {
        let now = Utc::now();
        let claims = SessionClaims {
            user_id: UserId::new(1),
            expires_at: now - Duration::seconds(5),
        };
        assert_eq!(claims.remaining_secs(now), 0);
    }

    #[test]
    fn session_ports_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionValidator>();
        assert_send_sync::<dyn TokenIssuer>();
    }
}
