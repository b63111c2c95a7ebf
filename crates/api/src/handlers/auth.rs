//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use learning_core::error::CoreError;
use learning_core::types::DbId;
use learning_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::password_matches;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and return an access token.
/// The account's active state is only revealed once the password checks out.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    if !password_matches(&input.password, &user.password_hash) {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(invalid());
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let issued = state
        .tokens
        .issue(user.id)
        .map_err(|e| AppError::InternalError(format!("Token signing failed: {e}")))?;

    tracing::info!(user_id = user.id, is_staff = user.is_staff, "User logged in");

    Ok(Json(AuthResponse {
        access_token: issued.token,
        expires_in: issued.expires_in_secs,
        user: UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            is_staff: user.is_staff,
        },
    }))
}
