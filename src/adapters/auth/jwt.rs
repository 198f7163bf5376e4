//! HS256 session tokens.
//!
//! Implements both `TokenIssuer` and `SessionValidator` so the signing key
//! is held in one place.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, UserId};
use crate::ports::{IssuedToken, SessionClaims, SessionValidator, TokenIssuer};

/// Token payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Unique token id, so two logins in the same second differ
    pub jti: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

/// Issues and validates session tokens.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &Secret<String>, issuer: impl Into<String>, ttl: Duration) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            &config.jwt_secret,
            config.issuer.clone(),
            Duration::minutes(config.token_ttl_minutes as i64),
        )
    }

    /// Encode arbitrary claims with this service's key.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::service_unavailable(format!("token signing failed: {}", e)))
    }

    /// Verify signature, issuer and expiry, returning the raw claims.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenService {
    async fn issue(&self, user_id: UserId) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
        };

        Ok(IssuedToken {
            token: self.encode_claims(&claims)?,
            expires_at: timestamp_to_datetime(claims.exp)?,
        })
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let claims = self.decode_claims(token)?;
        let user_id = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        Ok(SessionClaims {
            user_id,
            expires_at: timestamp_to_datetime(claims.exp)?,
        })
    }
}

fn timestamp_to_datetime(secs: i64) -> Result<DateTime<Utc>, AuthError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or(AuthError::InvalidToken)
}
