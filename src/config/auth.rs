//! Authentication configuration (session tokens, cookie, password hashing)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 key length accepted in production.
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing key for session tokens
    pub jwt_secret: Secret<String>,

    /// Session lifetime in minutes
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: u64,

    /// Value of the `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Mark the session cookie `Secure`
    #[serde(default)]
    pub cookie_secure: bool,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Session lifetime as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_minutes * 60)
    }

    /// Validate authentication configuration
    ///
    /// Production requires a long signing key and a Secure cookie.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret_len = self.jwt_secret.expose_secret().len();
        if secret_len == 0 {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.token_ttl_minutes == 0 || self.token_ttl_minutes > 1440 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ValidationError::InvalidBcryptCost);
        }
        if *environment == Environment::Production {
            if secret_len < MIN_PRODUCTION_SECRET_LEN {
                return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
            }
            if !self.cookie_secure {
                return Err(ValidationError::InsecureCookieInProduction);
            }
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Secret::new(String::new()),
            token_ttl_minutes: default_token_ttl_minutes(),
            issuer: default_issuer(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_token_ttl_minutes() -> u64 {
    30
}

fn default_issuer() -> String {
    "supersub".to_string()
}

fn default_cookie_name() -> String {
    "jwt".to_string()
}

fn default_bcrypt_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: Secret::new(secret.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl(), Duration::from_secs(1800));
        assert_eq!(config.cookie_name, "jwt");
        assert_eq!(config.bcrypt_cost, 12);
        assert!(!config.cookie_secure);
    }

    #[test]
    fn test_validation_missing_secret() {
        assert_eq!(
            AuthConfig::default().validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_short_secret_allowed_outside_production() {
        assert!(with_secret("dev").validate(&Environment::Development).is_ok());
        assert_eq!(
            with_secret("dev").validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(32))
        );
    }

    #[test]
    fn test_production_requires_secure_cookie() {
        let config = with_secret(&"k".repeat(48));
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::InsecureCookieInProduction)
        );

        let config = AuthConfig {
            cookie_secure: true,
            ..with_secret(&"k".repeat(48))
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_bcrypt_cost_bounds() {
        let config = AuthConfig {
            bcrypt_cost: 3,
            ..with_secret("dev")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidBcryptCost)
        );
    }

    #[test]
    fn test_validation_token_ttl_bounds() {
        let config = AuthConfig {
            token_ttl_minutes: 0,
            ..with_secret("dev")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenTtl)
        );
    }
}
