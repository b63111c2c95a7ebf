//! Integration tests for `POST /api/v1/auth/login`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user, get_auth, post_json, staff_token, student_with_token, token_for,
    token_for_id, TEST_PASSWORD,
};
use learning_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_user_info(pool: PgPool) {
    let user = create_user(&pool, "grace", true).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "grace", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(json["expires_in"], 15 * 60);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "grace");
    assert_eq!(json["user"]["is_staff"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn issued_token_authenticates_later_requests(pool: PgPool) {
    create_user(&pool, "ada", true).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "ada", "password": TEST_PASSWORD }),
    )
    .await;
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_auth(app, "/api/v1/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_staff_login_reports_is_staff_false(pool: PgPool) {
    create_user(&pool, "linus", false).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "linus", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["is_staff"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_returns_401(pool: PgPool) {
    create_user(&pool, "grace", false).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "grace", "password": "not-the-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "nobody", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_user_returns_403(pool: PgPool) {
    let user = create_user(&pool, "margaret", false).await;
    assert!(UserRepo::deactivate(&pool, user.id).await.unwrap());
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "margaret", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_user_with_wrong_password_gets_401(pool: PgPool) {
    let user = create_user(&pool, "margaret", false).await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "margaret", "password": "guessing" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid username or password"
    );
}

// ---------------------------------------------------------------------------
// Tokens are checked against the current user row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_of_deactivated_user_is_rejected(pool: PgPool) {
    let (student, token) = student_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/students/{}", student.id);

    let response = get_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    UserRepo::deactivate(&pool, student.user_id).await.unwrap();

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn demoted_staff_loses_staff_access(pool: PgPool) {
    let (staff, token) = staff_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = get_auth(app.clone(), "/api/v1/students", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    sqlx::query("UPDATE users SET is_staff = false WHERE id = $1")
        .bind(staff.id)
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(app.clone(), "/api/v1/students", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = get_auth(app, "/api/v1/projects", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn promoted_user_gains_staff_access_without_new_token(pool: PgPool) {
    let user = create_user(&pool, "ta", false).await;
    let token = token_for(&user);
    let app = common::build_test_app(pool.clone());

    let response = get_auth(app.clone(), "/api/v1/projects", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    sqlx::query("UPDATE users SET is_staff = true WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(app, "/api/v1/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_for_unknown_user_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/students/1", &token_for_id(424_242)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
