//! Project entity model and DTOs.

use learning_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    /// Ordering position within the book.
    pub index: i32,
    pub active: bool,
    pub is_group_project: bool,
    pub is_advanced_project: Option<bool>,
    pub implementation_url: String,
    pub book_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project joined with its book, the book's course, and its optional info.
///
/// This is what the API serializes; the `info_*` columns are all `NULL`
/// when the project has no info row.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectDetail {
    pub id: DbId,
    pub name: String,
    pub index: i32,
    pub active: bool,
    pub is_group_project: bool,
    pub is_advanced_project: Option<bool>,
    pub implementation_url: String,
    pub book_id: DbId,
    pub book_name: String,
    pub book_index: i32,
    pub course_id: DbId,
    pub course_name: String,
    pub info_id: Option<DbId>,
    pub info_description: Option<String>,
    pub info_template_url: Option<String>,
}

/// The info portion of a [`ProjectDetail`], present only for projects with
/// an info row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfoSummary {
    pub id: DbId,
    pub description: String,
    pub template_url: String,
}

impl ProjectDetail {
    pub fn info(&self) -> Option<ProjectInfoSummary> {
        match (&self.info_id, &self.info_description, &self.info_template_url) {
            (Some(id), Some(description), Some(template_url)) => Some(ProjectInfoSummary {
                id: *id,
                description: description.clone(),
                template_url: template_url.clone(),
            }),
            _ => None,
        }
    }
}

/// DTO for creating a new project. New projects are always active.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub index: i32,
    pub is_group_project: bool,
    pub is_advanced_project: Option<bool>,
    pub implementation_url: String,
    pub book_id: DbId,
}

/// DTO for a full update of an existing project.
///
/// Every mutable field is overwritten; `book_id` is only reassigned when
/// present.
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub name: String,
    pub index: i32,
    pub active: bool,
    pub is_group_project: bool,
    pub is_advanced_project: Option<bool>,
    pub implementation_url: String,
    pub book_id: Option<DbId>,
}

/// Optional filters for listing projects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    pub book_id: Option<DbId>,
    pub course_id: Option<DbId>,
}
