//! LoginHandler - Command handler for password login.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, UserId};
use crate::domain::user::Email;
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

/// Credentials presented at login.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user_id: UserId,
    pub token: IssuedToken,
}

/// Handler for exchanging credentials for a session token.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            issuer,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        // A malformed email can't belong to anyone
        let email = Email::new(cmd.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, &user.password_hash).await? {
            tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(user.id).await?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            user_id: user.id,
            token,
        })
    }
}
