//! Request and response bodies for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::{Gender, User};

/// A user as exposed by the API. The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub gender: Gender,
    pub offer_id: Option<i64>,
    pub previous_offer_id: Option<i64>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            email: user.email.as_str().to_string(),
            firstname: user.firstname.as_str().to_string(),
            lastname: user.lastname.as_str().to_string(),
            age: user.age.years(),
            gender: user.gender,
            offer_id: user.current_offer().map(|id| id.as_i64()),
            previous_offer_id: user.previous_offer().map(|id| id.as_i64()),
        }
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub gender: String,
    pub password: String,
}

/// Body of `PATCH /users/{id}`.
///
/// Offer fields are not accepted here; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_ignores_offer_fields() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"age": 40, "offer_id": 3, "previous_offer_id": 1}"#).unwrap();
        assert_eq!(req.age, Some(40));
        assert!(req.email.is_none());
    }
}
