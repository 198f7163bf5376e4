//! In-memory token blacklist with lazy expiry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::TokenBlacklist;

/// In-memory blacklist; entries are dropped when looked up after expiry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenBlacklist {
    entries: Arc<RwLock<HashMap<String, Instant>>>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of live entries.
    pub async fn live_entries(&self) -> usize {
        let now = Instant::now();
        self.entries.read().await.values().filter(|exp| **exp > now).count()
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                None => return Ok(false),
                Some(expires_at) if *expires_at > now => return Ok(true),
                Some(_) => {}
            }
        }
        self.entries.write().await.remove(token);
        Ok(false)
    }

    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), DomainError> {
        if ttl.is_zero() {
            return Ok(());
        }
        self.entries
            .write()
            .await
            .insert(token.to_string(), Instant::now() + ttl);
        Ok(())
    }
}
