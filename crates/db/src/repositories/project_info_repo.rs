//! Repository for the `project_infos` table.
//!
//! Writes happen only as part of a project write, so the mutating helpers
//! run inside the caller's transaction.

use learning_core::project::AdvancedProjectFields;
use learning_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::project_info::ProjectInfo;

const COLUMNS: &str = "id, description, template_url, project_id, created_at, updated_at";

/// Provides access to the info row owned by an advanced project.
pub struct ProjectInfoRepo;

impl ProjectInfoRepo {
    /// Find the info row of a project, if it has one.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_infos WHERE project_id = $1");
        sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Create the project's info row, or overwrite it if one exists.
    pub async fn upsert_for_project(
        tx: &mut Transaction<'_, Postgres>,
        project_id: DbId,
        fields: &AdvancedProjectFields,
    ) -> Result<ProjectInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_infos (description, template_url, project_id)
             VALUES ($1, $2, $3)
             ON CONFLICT (project_id) DO UPDATE SET
                description = EXCLUDED.description,
                template_url = EXCLUDED.template_url
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(&fields.description)
            .bind(&fields.template_url)
            .bind(project_id)
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete the project's info row. Returns `false` when there was none.
    pub async fn delete_for_project(
        tx: &mut Transaction<'_, Postgres>,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_infos WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
