//! Handlers for the `/projects` resource.
//!
//! Every handler requires a staff caller. Project and info writes are
//! validated up front and persisted in one transaction by [`ProjectRepo`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use learning_core::error::CoreError;
use learning_core::project::{validate_advanced_fields, Expansions};
use learning_core::types::DbId;
use learning_db::models::project::{CreateProject, ProjectDetail, UpdateProject};
use learning_db::repositories::{BookRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireStaff;
use crate::query::{expansions, ProjectListParams, QueryPairs};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub index: i32,
    pub is_group_project: bool,
    pub is_advanced_project: Option<bool>,
    pub book: DbId,
    pub implementation_url: String,
    pub description: Option<String>,
    pub template_url: Option<String>,
}

/// Request body for `PUT /projects/{id}`.
///
/// `implementation_url` falls back to an empty string; `book` is only
/// reassigned when present.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: String,
    pub index: i32,
    pub active: bool,
    pub is_group_project: bool,
    pub is_advanced_project: Option<bool>,
    pub implementation_url: Option<String>,
    pub book: Option<DbId>,
    pub description: Option<String>,
    pub template_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A related record rendered as a bare id or, when expanded, `{ id, name }`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Related {
    Id(DbId),
    Expanded { id: DbId, name: String },
}

/// Nested info object of an advanced project.
#[derive(Debug, Serialize)]
pub struct ProjectInfoResponse {
    pub id: DbId,
    pub description: String,
    pub template_url: String,
}

/// Wire representation of a project.
///
/// `info` serializes as `null` when the project has no info row.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: DbId,
    pub name: String,
    pub book: Related,
    pub course: Related,
    pub index: i32,
    pub active: bool,
    pub is_group_project: bool,
    pub is_advanced_project: Option<bool>,
    pub implementation_url: String,
    pub info: Option<ProjectInfoResponse>,
}

impl ProjectResponse {
    pub fn from_detail(detail: ProjectDetail, expand: Expansions) -> Self {
        let info = detail.info().map(|info| ProjectInfoResponse {
            id: info.id,
            description: info.description,
            template_url: info.template_url,
        });

        let book = if expand.book {
            Related::Expanded {
                id: detail.book_id,
                name: detail.book_name,
            }
        } else {
            Related::Id(detail.book_id)
        };

        let course = if expand.course {
            Related::Expanded {
                id: detail.course_id,
                name: detail.course_name,
            }
        } else {
            Related::Id(detail.course_id)
        };

        Self {
            id: detail.id,
            name: detail.name,
            book,
            course,
            index: detail.index,
            active: detail.active,
            is_group_project: detail.is_group_project,
            is_advanced_project: detail.is_advanced_project,
            implementation_url: detail.implementation_url,
            info,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
///
/// Create a project, plus its info row when it is advanced. Returns the
/// serialized project with 201 Created.
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    let info = validate_advanced_fields(
        input.is_advanced_project,
        input.description.as_deref(),
        input.template_url.as_deref(),
    )?;
    ensure_book_exists(&state, input.book).await?;

    let create_dto = CreateProject {
        name: input.name,
        index: input.index,
        is_group_project: input.is_group_project,
        is_advanced_project: input.is_advanced_project,
        implementation_url: input.implementation_url,
        book_id: input.book,
    };
    let project = ProjectRepo::create(&state.pool, &create_dto, info.as_ref()).await?;

    tracing::info!(
        project_id = project.id,
        book_id = project.book_id,
        user_id = staff.user_id,
        "Project created"
    );

    let detail = ProjectRepo::find_detail_by_id(&state.pool, project.id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Project {} vanished after insert", project.id)))?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse::from_detail(detail, Expansions::default())),
    ))
}

/// GET /api/v1/projects
///
/// List projects ordered by book index then project index, optionally
/// filtered by `courseId` and/or `bookId`.
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<ProjectResponse>>> {
    let params = ProjectListParams::from_pairs(&pairs)?;
    let details = ProjectRepo::list_details(&state.pool, &params.filter).await?;

    let projects = details
        .into_iter()
        .map(|detail| ProjectResponse::from_detail(detail, params.expand))
        .collect();
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<ProjectResponse>> {
    let detail = ProjectRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(ProjectResponse::from_detail(detail, expansions(&pairs))))
}

/// PUT /api/v1/projects/{id}
///
/// Overwrite the project's fields and reconcile its info row. A rejected
/// request leaves the project untouched. Returns 204 No Content.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectRequest>,
) -> AppResult<StatusCode> {
    let info = validate_advanced_fields(
        input.is_advanced_project,
        input.description.as_deref(),
        input.template_url.as_deref(),
    )?;
    if let Some(book_id) = input.book {
        ensure_book_exists(&state, book_id).await?;
    }

    let update_dto = UpdateProject {
        name: input.name,
        index: input.index,
        active: input.active,
        is_group_project: input.is_group_project,
        is_advanced_project: input.is_advanced_project,
        implementation_url: input.implementation_url.unwrap_or_default(),
        book_id: input.book,
    };

    ProjectRepo::update(&state.pool, id, &update_dto, info.as_ref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, user_id = staff.user_id, "Project updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/projects/{id}
///
/// Delete the project and, by cascade, its info row.
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, user_id = staff.user_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject a request that points at a book that does not exist.
async fn ensure_book_exists(state: &AppState, book_id: DbId) -> AppResult<()> {
    if BookRepo::exists(&state.pool, book_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Book with id {book_id} does not exist"
        ))))
    }
}
