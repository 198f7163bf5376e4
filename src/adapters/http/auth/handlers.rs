//! HTTP handlers for authentication endpoints.

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::adapters::http::dto::{ErrorResponse, MessageResponse};
use crate::adapters::http::middleware::{extract_token, RequireAuth};
use crate::adapters::http::users::UserApiError;
use crate::adapters::http::{AppState, SessionCookie};
use crate::application::handlers::{
    GetProfileQuery, LoginCommand, LogoutCommand, SignupCommand,
};
use crate::domain::foundation::{AuthError, ErrorCode};
use crate::domain::user::UserError;

use super::dto::{LoginRequest, LoginResponse, SignupRequest, UserProfileResponse};

/// POST /auth/signup - Register a new account
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
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

    Ok(Json(UserProfileResponse::from(&user)))
}

/// POST /auth/login - Exchange credentials for a session cookie and token
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let result = state
        .login_handler()
        .handle(LoginCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    let cookie = session_cookie(&state.cookie, result.token.token.clone());
    Ok((jar.add(cookie), Json(LoginResponse::bearer(result.token.token))))
}

/// POST /auth/logout - Revoke the session token and clear the cookie
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    let token = extract_token(&headers, &state.cookie.name);
    state.logout_handler().handle(LogoutCommand { token }).await;

    let removal = Cookie::build((state.cookie.name.clone(), "")).path("/");
    (
        jar.remove(removal),
        Json(MessageResponse::new("Successfully logged out")),
    )
}

/// GET /auth/me - Current user's profile
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AuthApiError> {
    let view = state
        .profile_handler()
        .handle(GetProfileQuery { user_id: user.id })
        .await?;
    Ok(Json(UserProfileResponse::from(view)))
}

fn session_cookie(settings: &SessionCookie, token: String) -> Cookie<'static> {
    Cookie::build((settings.name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(settings.max_age.as_secs() as i64))
        .build()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for authentication endpoints.
#[derive(Debug)]
pub enum AuthApiError {
    Auth(AuthError),
    User(UserError),
}

impl From<AuthError> for AuthApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<UserError> for AuthApiError {
    fn from(err: UserError) -> Self {
        Self::User(err)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AuthApiError::User(err) => UserApiError::from(err).into_response(),
            AuthApiError::Auth(AuthError::ServiceUnavailable(msg)) => {
                tracing::error!("Auth request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("INTERNAL_ERROR", "Internal server error")),
                )
                    .into_response()
            }
            AuthApiError::Auth(err) => {
                let detail = match err {
                    AuthError::InvalidCredentials => err.to_string(),
                    _ => AuthError::InvalidToken.to_string(),
                };
                (
                    StatusCode::UNAUTHORIZED,
                    [(axum::http::header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ErrorResponse::new(ErrorCode::Unauthorized.to_string(), detail)),
                )
                    .into_response()
            }
        }
    }
}
