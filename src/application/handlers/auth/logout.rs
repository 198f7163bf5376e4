//! LogoutHandler - Revokes the presented session token.
//!
//! Logout always succeeds from the caller's point of view. The token is
//! blacklisted for as long as it could still be used; if the blacklist
//! store is down the revocation is dropped and logged.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::foundation::AuthError;
use crate::ports::{SessionValidator, TokenBlacklist};

/// Command to end a session.
#[derive(Debug, Clone, Default)]
pub struct LogoutCommand {
    /// The raw token, if the client presented one.
    pub token: Option<String>,
}

/// Outcome of a logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutResult {
    /// The token was written to the blacklist.
    Revoked,
    /// Nothing to revoke: no token, or the token had already expired.
    NothingToRevoke,
    /// The blacklist store failed; the token stays usable until expiry.
    RevocationDropped,
}

/// Handler for logging out.
pub struct LogoutHandler {
    validator: Arc<dyn SessionValidator>,
    blacklist: Arc<dyn TokenBlacklist>,
    fallback_ttl: Duration,
}

impl LogoutHandler {
    /// `fallback_ttl` is used when the token cannot be decoded.
    pub fn new(
        validator: Arc<dyn SessionValidator>,
        blacklist: Arc<dyn TokenBlacklist>,
        fallback_ttl: Duration,
    ) -> Self {
        Self {
            validator,
            blacklist,
            fallback_ttl,
        }
    }

    pub async fn handle(&self, cmd: LogoutCommand) -> LogoutResult {
        let Some(token) = cmd.token else {
            return LogoutResult::NothingToRevoke;
        };

        let ttl = match self.validator.validate(&token).await {
            Ok(claims) => Duration::from_secs(claims.remaining_secs(Utc::now())),
            Err(AuthError::TokenExpired) => Duration::ZERO,
            Err(_) => self.fallback_ttl,
        };

        if ttl.is_zero() {
            return LogoutResult::NothingToRevoke;
        }

        match self.blacklist.revoke(&token, ttl).await {
            Ok(()) => {
                tracing::info!(ttl_secs = ttl.as_secs(), "Session token revoked");
                LogoutResult::Revoked
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token blacklist unavailable; revocation dropped");
                LogoutResult::RevocationDropped
            }
        }
    }
}
