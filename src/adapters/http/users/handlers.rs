//! HTTP handlers for user endpoints.
//!
//! All routes require authentication. Creation shares the signup path so
//! validation and hashing behave identically.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::dto::{ErrorResponse, MessageResponse, Pagination};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::SignupCommand;
use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::user::{Age, Email, PersonName, UserError, UserUpdate};
use crate::ports::{PasswordHasher, UserRepository};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// POST /users - Create a user
pub async fn create_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let user = state
        .signup_handler()
        .handle(SignupCommand {
            email: request.email,
            firstname: request.firstname,
            lastname: request.lastname,
            age: request.age,
            gender: request.gender,
            password: request.password,
        })
        .await?;
    Ok(Json(UserResponse::from(&user)))
}

/// GET /users - List users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(page): Query<Pagination>,
) -> Result<impl IntoResponse, UserApiError> {
    let (skip, limit) = page.bounds();
    let users = state.users.list(skip, limit).await?;
    let body: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(body))
}

/// GET /users/{id} - Get one user
pub async fn get_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, UserApiError> {
    let id = UserId::new(user_id);
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| UserError::not_found(id))?;
    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /users/{id} - Update profile fields
pub async fn update_user(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Path(user_id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let id = UserId::new(user_id);
    let mut user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| UserError::not_found(id))?;

    let password_hash = match request.password {
        Some(password) if password.is_empty() => {
            return Err(UserError::validation("password", "must not be empty").into());
        }
        Some(password) => Some(
            state
                .password_hasher
                .hash(&password)
                .await
                .map_err(|e| UserError::infrastructure(e.to_string()))?,
        ),
        None => None,
    };

    let update = UserUpdate {
        email: request.email.map(Email::new).transpose()?,
        firstname: request
            .firstname
            .map(|n| PersonName::new("firstname", n))
            .transpose()?,
        lastname: request
            .lastname
            .map(|n| PersonName::new("lastname", n))
            .transpose()?,
        age: request.age.map(Age::new).transpose()?,
        gender: request.gender.map(|g| g.parse()).transpose()?,
        password_hash,
    };

    if let Some(email) = &update.email {
        if let Some(owner) = state.users.find_by_email(email).await? {
            if owner.id != user.id {
                return Err(UserError::email_already_registered(email.as_str()).into());
            }
        }
    }

    if !update.is_empty() {
        update.apply_to(&mut user);
        state.users.update_profile(&user).await?;
        tracing::info!(user_id = %user.id, updated_by = %actor.id, "User profile updated");
    }

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{id} - Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, UserApiError> {
    let id = UserId::new(user_id);
    state.users.delete(id).await?;
    tracing::info!(user_id = %id, deleted_by = %actor.id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts user errors to HTTP responses.
#[derive(Debug)]
pub struct UserApiError(UserError);

impl From<UserError> for UserApiError {
    fn from(err: UserError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for UserApiError {
    fn from(err: DomainError) -> Self {
        Self(UserError::from(err))
    }
}

impl From<ValidationError> for UserApiError {
    fn from(err: ValidationError) -> Self {
        Self(UserError::from(err))
    }
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::EmailAlreadyRegistered(_) | UserError::ValidationFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            UserError::Infrastructure(msg) => {
                tracing::error!("User request failed: {}", msg);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("INTERNAL_ERROR", "Internal server error")),
                )
                    .into_response();
            }
        };

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}
