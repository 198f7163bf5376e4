//! Request and response bodies for authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::offers::OfferResponse;
use crate::application::handlers::ProfileView;
use crate::domain::user::User;

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub gender: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub token_type: String,
}

impl LoginResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            message: "Login successful".to_string(),
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// The authenticated user's profile, offers resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: i64,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub gender: String,
    pub offer: Option<OfferResponse>,
    pub previous_offer: Option<OfferResponse>,
}

impl From<&User> for UserProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            email: user.email.as_str().to_string(),
            firstname: user.firstname.as_str().to_string(),
            lastname: user.lastname.as_str().to_string(),
            age: user.age.years(),
            gender: user.gender.as_str().to_string(),
            offer: None,
            previous_offer: None,
        }
    }
}

impl From<ProfileView> for UserProfileResponse {
    fn from(view: ProfileView) -> Self {
        Self {
            offer: view.offer.map(OfferResponse::from),
            previous_offer: view.previous_offer.map(OfferResponse::from),
            ..Self::from(&view.user)
        }
    }
}
