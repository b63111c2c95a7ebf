//! Repository for the `projects` table.
//!
//! Project writes that touch the info row run in a single transaction so an
//! advanced project is never left without its info, and a non-advanced
//! project never keeps a stale one.

use learning_core::project::AdvancedProjectFields;
use learning_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectDetail, ProjectFilter, UpdateProject};
use crate::repositories::ProjectInfoRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, index, active, is_group_project, is_advanced_project, \
                       implementation_url, book_id, created_at, updated_at";

/// Columns and joins for [`ProjectDetail`] queries.
const DETAIL_SELECT: &str = "SELECT p.id, p.name, p.index, p.active, p.is_group_project, \
        p.is_advanced_project, p.implementation_url, p.book_id, \
        b.name AS book_name, b.index AS book_index, \
        c.id AS course_id, c.name AS course_name, \
        pi.id AS info_id, pi.description AS info_description, \
        pi.template_url AS info_template_url \
     FROM projects p \
     JOIN books b ON b.id = p.book_id \
     JOIN courses c ON c.id = b.course_id \
     LEFT JOIN project_infos pi ON pi.project_id = p.id";

/// Provides CRUD operations for projects and their info rows.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new active project and, when `info` is given, its info row.
    ///
    /// Both inserts commit together or not at all.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        info: Option<&AdvancedProjectFields>,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects
                (name, index, active, is_group_project, is_advanced_project, implementation_url, book_id)
             VALUES ($1, $2, true, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.index)
            .bind(input.is_group_project)
            .bind(input.is_advanced_project)
            .bind(&input.implementation_url)
            .bind(input.book_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(fields) = info {
            ProjectInfoRepo::upsert_for_project(&mut tx, project.id, fields).await?;
        }

        tx.commit().await?;
        tracing::debug!(project_id = project.id, advanced = info.is_some(), "Project created");
        Ok(project)
    }

    /// Find a project row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project with its book, course, and info joined in.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE p.id = $1");
        sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects ordered by book index, then project index.
    ///
    /// `course_id` and `book_id` narrow the result when set; both may be
    /// combined.
    pub async fn list_details(
        pool: &PgPool,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::BIGINT IS NULL OR b.course_id = $1)
               AND ($2::BIGINT IS NULL OR p.book_id = $2)
             ORDER BY b.index ASC, p.index ASC, p.id ASC"
        );
        sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(filter.course_id)
            .bind(filter.book_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a project's mutable fields and reconcile its info row.
    ///
    /// With `info` set the info row is created or overwritten; without it any
    /// existing info row is removed. Returns `None` (and writes nothing) if
    /// no project with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
        info: Option<&AdvancedProjectFields>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                name = $2,
                index = $3,
                active = $4,
                is_group_project = $5,
                is_advanced_project = $6,
                implementation_url = $7,
                book_id = COALESCE($8, book_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.index)
            .bind(input.active)
            .bind(input.is_group_project)
            .bind(input.is_advanced_project)
            .bind(&input.implementation_url)
            .bind(input.book_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        match info {
            Some(fields) => {
                ProjectInfoRepo::upsert_for_project(&mut tx, project.id, fields).await?;
            }
            None => {
                let removed = ProjectInfoRepo::delete_for_project(&mut tx, project.id).await?;
                if removed {
                    tracing::debug!(project_id = project.id, "Removed project info");
                }
            }
        }

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Permanently delete a project by ID. Its info row goes with it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
