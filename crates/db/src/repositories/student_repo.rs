//! Repository for the `nss_users` (student profile) table.

use learning_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

const COLUMNS: &str = "s.id, s.user_id, s.slack_handle, s.github_handle, s.created_at, s.updated_at";

/// Provides read access to student profiles.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a student profile for an existing user.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO nss_users AS s (user_id, slack_handle, github_handle)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(input.user_id)
            .bind(&input.slack_handle)
            .bind(&input.github_handle)
            .fetch_one(pool)
            .await
    }

    /// Find a student profile by its own ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nss_users s WHERE s.id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List profiles whose identity is not staff, ordered by ID ascending.
    pub async fn list_non_staff(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM nss_users s
             JOIN users u ON u.id = s.user_id
             WHERE u.is_staff = false
             ORDER BY s.id ASC"
        );
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }
}
