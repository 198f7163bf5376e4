//! Shared application state for the HTTP layer.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::{
    GetProfileHandler, LoginHandler, LogoutHandler, SignupHandler, SubscribeHandler,
    UnsubscribeHandler,
};
use crate::config::AuthConfig;
use crate::ports::{
    OfferRepository, PasswordHasher, SessionValidator, TokenBlacklist, TokenIssuer, UserRepository,
};

/// Settings for the session cookie set at login.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
    pub max_age: Duration,
}

impl SessionCookie {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            secure: config.cookie_secure,
            max_age: config.token_ttl(),
        }
    }
}

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub offers: Arc<dyn OfferRepository>,
    pub sessions: Arc<dyn SessionValidator>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub blacklist: Arc<dyn TokenBlacklist>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub cookie: SessionCookie,
}

impl AppState {
    pub fn subscribe_handler(&self) -> SubscribeHandler {
        SubscribeHandler::new(self.users.clone(), self.offers.clone())
    }

    pub fn unsubscribe_handler(&self) -> UnsubscribeHandler {
        UnsubscribeHandler::new(self.users.clone(), self.offers.clone())
    }

    pub fn signup_handler(&self) -> SignupHandler {
        SignupHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.token_issuer.clone(),
        )
    }

    /// Undecodable tokens are revoked for a full session lifetime.
    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(
            self.sessions.clone(),
            self.blacklist.clone(),
            self.cookie.max_age,
        )
    }

    pub fn profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.users.clone(), self.offers.clone())
    }
}
