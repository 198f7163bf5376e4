//! End-to-end tests for the HTTP API over in-memory adapters.
//!
//! Each test builds the full router (middleware, cookies, JSON bodies)
//! and drives it with `oneshot` requests:
//! 1. Account lifecycle: signup, login, profile, logout
//! 2. Subscription transitions and their error mapping
//! 3. Offer catalog reads and guarded deletes

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use secrecy::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;

use supersub::adapters::auth::{BcryptPasswordHasher, JwtTokenService};
use supersub::adapters::http::{app_router, AppState, SessionCookie};
use supersub::adapters::memory::{
    InMemoryOfferRepository, InMemoryTokenBlacklist, InMemoryUserRepository,
};
use supersub::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

const COOKIE_NAME: &str = "jwt";

struct TestApp {
    router: Router,
    users: InMemoryUserRepository,
    blacklist: InMemoryTokenBlacklist,
}

impl TestApp {
    fn new() -> Self {
        let users = InMemoryUserRepository::new();
        let blacklist = InMemoryTokenBlacklist::new();
        let tokens = Arc::new(JwtTokenService::new(
            &Secret::new("integration-test-secret-0123456789".to_string()),
            "supersub",
            chrono::Duration::minutes(30),
        ));

        let state = AppState {
            users: Arc::new(users.clone()),
            offers: Arc::new(InMemoryOfferRepository::with_catalog().unwrap().guarded_by(users.clone())),
            sessions: tokens.clone(),
            token_issuer: tokens,
            blacklist: Arc::new(blacklist.clone()),
            password_hasher: Arc::new(BcryptPasswordHasher::new(4)),
            cookie: SessionCookie {
                name: COOKIE_NAME.to_string(),
                secure: false,
                max_age: Duration::from_secs(1800),
            },
        };

        Self {
            router: app_router(state, &ServerConfig::default()),
            users,
            blacklist,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn delete(&self, uri: &str, token: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Sign up and log in, returning the bearer token.
    async fn register(&self, email: &str) -> String {
        let response = self
            .post_json(
                "/auth/signup",
                None,
                json!({
                    "email": email,
                    "firstname": "Ada",
                    "lastname": "Lovelace",
                    "age": 36,
                    "gender": "FEMALE",
                    "password": "correct horse"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = self
            .post_json(
                "/auth/login",
                None,
                json!({ "email": email, "password": "correct horse" }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await["access_token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    async fn subscribe(&self, token: &str, offer_id: i64) -> Response {
        self.post_json(
            "/subscription/subscribeTo",
            Some(token),
            json!({ "offer_id": offer_id }),
        )
        .await
    }

    async fn unsubscribe(&self, token: &str, offer_id: i64) -> Response {
        self.post_json(
            "/subscription/unsubscribeTo",
            Some(token),
            json!({ "offer_id": offer_id }),
        )
        .await
    }
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Account Lifecycle
// =============================================================================

#[tokio::test]
async fn login_sets_http_only_session_cookie() {
    let app = TestApp::new();
    app.register("ada@example.com").await;

    let response = app
        .post_json(
            "/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "correct horse" }),
        )
        .await;

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("jwt="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));

    let body = body_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["token_type"], "bearer");
}

#[tokio::test]
async fn session_cookie_authenticates_requests() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let response = app
        .send(
            Request::builder()
                .uri("/auth/me")
                .header(header::COOKIE, format!("{}={}", COOKIE_NAME, token))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["offer"], Value::Null);
}

#[tokio::test]
async fn wrong_password_is_401() {
    let app = TestApp::new();
    app.register("ada@example.com").await;

    let response = app
        .post_json(
            "/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "wrong" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["detail"], "Incorrect email or password");
}

#[tokio::test]
async fn duplicate_signup_is_400() {
    let app = TestApp::new();
    app.register("ada@example.com").await;

    let response = app
        .post_json(
            "/auth/signup",
            None,
            json!({
                "email": "ada@example.com",
                "firstname": "Other",
                "lastname": "Person",
                "age": 40,
                "gender": "MALE",
                "password": "secret"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "EMAIL_ALREADY_REGISTERED");
    assert_eq!(app.users.user_count().await, 1);
}

#[tokio::test]
async fn logout_revokes_token() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let response = app.post_json("/auth/logout", Some(&token), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Successfully logged out");
    assert_eq!(app.blacklist.live_entries().await, 1);

    let response = app.get("/auth/me", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let app = TestApp::new();

    let response = app.post_json("/auth/logout", None, json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.blacklist.live_entries().await, 0);
}

// =============================================================================
// Subscription Transitions
// =============================================================================

#[tokio::test]
async fn subscription_journey_follows_access_rules() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    // First subscription: Starter accepts first-time subscribers.
    let response = app.subscribe(&token, 1).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Successfully subscribed to offer");
    assert_eq!(body["offer_title"], "Offre Starter");

    // Starter has no switch rule.
    let response = app.subscribe(&token, 1).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "OFFER_NOT_ACCESSIBLE");

    // Premium accepts a switch.
    let response = app.subscribe(&token, 3).await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = body_json(app.get("/auth/me", Some(&token)).await).await;
    assert_eq!(profile["offer"]["id"], 3);
    assert_eq!(profile["previous_offer"]["id"], 1);

    let response = app.unsubscribe(&token, 3).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["previous_offer_id"], 3);
    assert_eq!(body["previous_offer_title"], "Offre Premium");

    let response = app.unsubscribe(&token, 3).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NOT_SUBSCRIBED");
}

#[tokio::test]
async fn returning_subscriber_cannot_retake_first_sub_only_offer() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    assert_eq!(app.subscribe(&token, 1).await.status(), StatusCode::OK);
    assert_eq!(app.unsubscribe(&token, 1).await.status(), StatusCode::OK);

    assert_eq!(app.subscribe(&token, 1).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.subscribe(&token, 2).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn unsubscribing_from_other_offer_is_400() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    app.subscribe(&token, 2).await;

    let response = app.unsubscribe(&token, 1).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn subscribing_to_unknown_offer_is_404() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    let response = app.subscribe(&token, 99).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "OFFER_NOT_FOUND");
}

#[tokio::test]
async fn subscribing_without_session_is_401() {
    let app = TestApp::new();

    let response = app
        .post_json("/subscription/subscribeTo", None, json!({ "offer_id": 1 }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

// =============================================================================
// Offer Catalog
// =============================================================================

#[tokio::test]
async fn catalog_is_public() {
    let app = TestApp::new();

    let response = app.get("/offers", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let offers = body_json(response).await;
    let titles: Vec<&str> = offers
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Offre Starter", "Offre Standard", "Offre Premium"]);
}

#[tokio::test]
async fn deleting_offer_in_use_is_409() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;
    app.subscribe(&token, 3).await;

    let response = app.delete("/offers/3", &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "OFFER_IN_USE");

    let response = app.delete("/offers/2", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.get("/offers/2", None).await.status(), StatusCode::NOT_FOUND);
}
