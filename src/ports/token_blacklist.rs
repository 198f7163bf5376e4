//! Revoked-token store port.
//!
//! Entries expire on their own once the token would have expired anyway.
//! Callers decide what to do when the store is unreachable.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// True if `token` was revoked and the revocation has not lapsed.
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError>;

    /// Revoke `token` for `ttl`.
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), DomainError>;
}
