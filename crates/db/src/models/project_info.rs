//! Project info entity model.

use learning_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `project_infos` table: the extra metadata of an advanced
/// project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectInfo {
    pub id: DbId,
    pub description: String,
    pub template_url: String,
    pub project_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
