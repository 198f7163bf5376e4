//! bcrypt password hashing.

use async_trait::async_trait;

use crate::domain::foundation::AuthError;
use crate::ports::PasswordHasher;

/// bcrypt hasher; work runs on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::service_unavailable(format!("hashing task failed: {}", e)))?
            .map_err(|e| AuthError::service_unavailable(format!("password hashing failed: {}", e)))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::service_unavailable(format!("hashing task failed: {}", e)))?
            .map_err(|e| AuthError::service_unavailable(format!("password verification failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4);
        let hashed = hasher.hash("correct horse").await.unwrap();

        assert_ne!(hashed, "correct horse");
        assert!(hasher.verify("correct horse", &hashed).await.unwrap());
        assert!(!hasher.verify("battery staple", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = BcryptPasswordHasher::new(4);
        assert!(hasher.verify("pw", "not-a-bcrypt-hash").await.is_err());
    }
}
