//! Redis-backed token blacklist.
//!
//! Keys are `<prefix><sha256(token)>` written with SETEX, so entries vanish
//! when the token would have expired anyway. The connection is opened
//! lazily and dropped after any failure so the next call reconnects.
//! The cache lock is never held while connecting: during an outage each
//! caller waits at most one `timeout` instead of queueing behind the others.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::RedisConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::TokenBlacklist;

#[derive(Clone)]
pub struct RedisTokenBlacklist {
    client: redis::Client,
    conn: Arc<Mutex<Option<MultiplexedConnection>>>,
    key_prefix: String,
    timeout: Duration,
}

impl RedisTokenBlacklist {
    /// Create a blacklist for `config.url`. No connection is made yet.
    pub fn new(config: &RedisConfig) -> Result<Self, DomainError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e: redis::RedisError| cache_error("invalid redis url", e))?;
        Ok(Self {
            client,
            conn: Arc::new(Mutex::new(None)),
            key_prefix: config.key_prefix.clone(),
            timeout: config.timeout(),
        })
    }

    fn key_for(&self, token: &str) -> String {
        blacklist_key(&self.key_prefix, token)
    }

    async fn connection(&self) -> Result<MultiplexedConnection, DomainError> {
        if let Some(conn) = self.conn.lock().await.as_ref() {
            return Ok(conn.clone());
        }

        let conn = tokio::time::timeout(self.timeout, self.client.get_multiplexed_async_connection())
            .await
            .map_err(|_| DomainError::new(ErrorCode::CacheError, "redis connect timed out"))?
            .map_err(|e: redis::RedisError| cache_error("redis connect failed", e))?;

        // Concurrent callers may race to connect; the first stored one wins.
        let mut guard = self.conn.lock().await;
        Ok(guard.get_or_insert(conn).clone())
    }

    async fn reset(&self) {
        *self.conn.lock().await = None;
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        let mut conn = self.connection().await?;
        let key = self.key_for(token);

        let result = tokio::time::timeout(self.timeout, conn.exists::<_, bool>(&key)).await;
        match result {
            Ok(Ok(exists)) => Ok(exists),
            Ok(Err(e)) => {
                self.reset().await;
                Err(cache_error("blacklist lookup failed", e))
            }
            Err(_) => {
                self.reset().await;
                Err(DomainError::new(ErrorCode::CacheError, "blacklist lookup timed out"))
            }
        }
    }

    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), DomainError> {
        let ttl_secs = ttl.as_secs();
        if ttl_secs == 0 {
            return Ok(());
        }
        let mut conn = self.connection().await?;
        let key = self.key_for(token);

        let mut cmd = redis::cmd("SETEX");
        cmd.arg(&key).arg(ttl_secs).arg("1");
        let result = tokio::time::timeout(self.timeout, cmd.query_async::<_, ()>(&mut conn)).await;
        match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                self.reset().await;
                Err(cache_error("blacklist write failed", e))
            }
            Err(_) => {
                self.reset().await;
                Err(DomainError::new(ErrorCode::CacheError, "blacklist write timed out"))
            }
        }
    }
}

/// Redis key for a token; the raw token never reaches the store.
pub fn blacklist_key(prefix: &str, token: &str) -> String {
    format!("{}{:x}", prefix, Sha256::digest(token.as_bytes()))
}

fn cache_error(context: &str, e: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::CacheError, format!("{}: {}", context, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_prefixed_sha256_hex() {
        let key = blacklist_key("blacklist:", "abc");
        assert_eq!(
            key,
            "blacklist:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn different_tokens_get_different_keys() {
        assert_ne!(blacklist_key("p:", "a"), blacklist_key("p:", "b"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let config = RedisConfig {
            url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(RedisTokenBlacklist::new(&config).is_err());
    }

    #[tokio::test]
    async fn concurrent_lookups_fail_open_within_one_timeout() {
        // Accepts connections and never answers, like a hung Redis.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = RedisConfig {
            url: format!("redis://{}", addr),
            timeout_secs: 1,
            ..Default::default()
        };
        let blacklist = RedisTokenBlacklist::new(&config).unwrap();

        let started = std::time::Instant::now();
        let mut lookups = tokio::task::JoinSet::new();
        for i in 0..6 {
            let blacklist = blacklist.clone();
            lookups.spawn(async move { blacklist.is_revoked(&format!("token-{}", i)).await });
        }
        while let Some(result) = lookups.join_next().await {
            assert!(result.unwrap().is_err());
        }

        // One connect plus one command timeout at most, never six in a row.
        assert!(
            started.elapsed() < Duration::from_millis(3500),
            "lookups were serialized: {:?}",
            started.elapsed()
        );
    }

    #[tokio::test]
    async fn zero_ttl_revoke_does_not_connect() {
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let blacklist = RedisTokenBlacklist::new(&config).unwrap();

        assert!(blacklist.revoke("token", Duration::ZERO).await.is_ok());
    }
}
