//! Authentication test helpers
//!
//! `TestApp` wires the real router to a `MemoryUserStore` and exposes
//! helpers for seeding users, minting tokens and sending requests.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use storefront::backend::auth::password::{PasswordHasher, MIN_COST};
use storefront::backend::auth::sessions::SessionKeys;
use storefront::backend::routes::create_router;
use storefront::backend::server::{AppState, HttpConfig};
use storefront::backend::users::memory::MemoryUserStore;
use storefront::backend::users::{NewUser, User, UserStore};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Buffered response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when the body was empty or not JSON
    pub json: serde_json::Value,
    /// Raw body as text
    pub body: String,
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<MemoryUserStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_http(HttpConfig::default())
    }

    pub fn with_http(http: HttpConfig) -> Self {
        let store = Arc::new(MemoryUserStore::new());
        let state = AppState::new(
            store.clone(),
            SessionKeys::new(TEST_SECRET.as_bytes()),
            PasswordHasher::new(MIN_COST),
        );
        let router = create_router(state.clone(), &http);
        Self { router, state, store }
    }

    /// Insert a user directly into the store
    pub async fn seed_user(&self, username: &str, password: &str, admin: bool) -> User {
        let password_hash = self
            .state
            .passwords
            .hash(password)
            .expect("Failed to hash test password");
        self.store
            .insert(NewUser {
                username: username.to_string(),
                password_hash,
                email: format!("{}@example.com", username),
                admin,
            })
            .await
            .expect("Failed to seed test user")
    }

    /// Seed an admin and return a valid token for it
    pub async fn admin_token(&self) -> String {
        let admin = self.seed_user("root", "root-password", true).await;
        self.token_for(&admin)
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state
            .sessions
            .issue(&user.id.to_hex())
            .expect("Failed to create test token")
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = String::from_utf8_lossy(&bytes).into_owned();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        TestResponse {
            status,
            headers,
            json,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(authorized(Request::builder().method(Method::GET).uri(uri), token, Body::empty()))
            .await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(authorized(Request::builder().method(Method::DELETE).uri(uri), token, Body::empty()))
            .await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: &serde_json::Value) -> TestResponse {
        let builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        self.send(authorized(builder, token, Body::from(body.to_string()))).await
    }

    pub async fn post_form(&self, uri: &str, token: Option<&str>, form: &str) -> TestResponse {
        let builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(authorized(builder, token, Body::from(form.to_string()))).await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        let form = format!("username={}&password={}", username, password);
        self.post_form("/api/login", None, &form).await
    }
}

fn authorized(builder: axum::http::request::Builder, token: Option<&str>, body: Body) -> Request<Body> {
    let builder = match token {
        Some(token) => builder.header(header::AUTHORIZATION, token),
        None => builder,
    };
    builder.body(body).expect("Failed to build test request")
}
