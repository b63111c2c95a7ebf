//! Student profile (`nss_users`) model and DTOs.

use learning_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A student profile row. Serialized in full; `user_id` is exposed as `user`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
    pub slack_handle: Option<String>,
    pub github_handle: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a student profile.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub user_id: DbId,
    pub slack_handle: Option<String>,
    pub github_handle: Option<String>,
}
