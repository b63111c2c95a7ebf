//! Shared helpers for API integration tests.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`; no
//! TCP listener is involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use learning_api::auth::password::hash_password;
use learning_api::auth::token::TokenKeys;
use learning_api::config::{ServerConfig, TokenConfig};
use learning_api::router::build_app_router;
use learning_api::state::AppState;
use learning_db::models::book::{Book, CreateBook};
use learning_db::models::course::{Course, CreateCourse};
use learning_db::models::student::{CreateStudent, Student};
use learning_db::models::user::{CreateUser, User};
use learning_db::repositories::{BookRepo, CourseRepo, StudentRepo, UserRepo};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// Plaintext password given to every seeded user.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        token: TokenConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            lifetime_mins: 15,
        },
    }
}

/// Build the full application router (same middleware as production).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config).expect("test CORS origin is valid")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, is_staff: bool) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@nss.test"),
            first_name: username.to_string(),
            last_name: "Tester".to_string(),
            password_hash,
            is_staff,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Issue an access token for a user id, signed with the test secret.
pub fn token_for_id(user_id: i64) -> String {
    TokenKeys::new(&test_config().token)
        .issue(user_id)
        .expect("token signing should succeed")
        .token
}

/// Issue an access token for a user, signed with the test secret.
pub fn token_for(user: &User) -> String {
    token_for_id(user.id)
}

/// A staff user and a token for it.
pub async fn staff_token(pool: &PgPool) -> (User, String) {
    let user = create_user(pool, "instructor", true).await;
    let token = token_for(&user);
    (user, token)
}

/// A non-staff user with a student profile, and a token for it.
pub async fn student_with_token(pool: &PgPool, username: &str) -> (Student, String) {
    let user = create_user(pool, username, false).await;
    let student = StudentRepo::create(
        pool,
        &CreateStudent {
            user_id: user.id,
            slack_handle: Some(format!("@{username}")),
            github_handle: Some(format!("{username}-gh")),
        },
    )
    .await
    .expect("student creation should succeed");
    let token = token_for(&user);
    (student, token)
}

pub async fn create_course(pool: &PgPool, name: &str) -> Course {
    CourseRepo::create(pool, &CreateCourse { name: name.to_string() })
        .await
        .expect("course creation should succeed")
}

pub async fn create_book(pool: &PgPool, course_id: i64, name: &str, index: i32) -> Book {
    BookRepo::create(
        pool,
        &CreateBook {
            name: name.to_string(),
            index,
            course_id,
        },
    )
    .await
    .expect("book creation should succeed")
}
