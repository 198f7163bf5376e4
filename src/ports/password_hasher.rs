//! Password hashing port.

use async_trait::async_trait;

use crate::domain::foundation::AuthError;

/// One-way password hashing.
///
/// Implementations may be CPU heavy and should keep that work off the
/// async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password.
    async fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for malformed
    /// hashes or hasher failures.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hasher_is_object_safe() {
        fn _accepts_dyn(_hasher: &dyn PasswordHasher) {}
    }
}
