//! Handlers for the `/students` resource.
//!
//! Every handler first checks the action against
//! [`has_permission`](learning_core::student_access::has_permission).
//! Update and destroy are accepted but change nothing.

use axum::extract::{Path, State};
use axum::Json;
use learning_core::error::CoreError;
use learning_core::student_access::{can_view_student, has_permission, StudentAction};
use learning_core::types::DbId;
use learning_db::models::student::Student;
use learning_db::repositories::StudentRepo;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Reject the request with 403 unless the caller may attempt `action`.
fn authorize(action: StudentAction, user: &AuthUser) -> AppResult<()> {
    if has_permission(action, user.is_staff) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Not permitted to {} students",
            action.as_str()
        ))))
    }
}

/// POST /api/v1/students
///
/// Student profiles are never created through the API.
pub async fn create(user: AuthUser) -> AppResult<Json<Value>> {
    authorize(StudentAction::Create, &user)?;
    Err(AppError::MethodNotAllowed(
        "Students cannot be created through this endpoint".into(),
    ))
}

/// GET /api/v1/students
///
/// List every profile whose identity is not staff.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Student>>> {
    authorize(StudentAction::List, &user)?;
    let students = StudentRepo::list_non_staff(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
///
/// Only the profile's own identity or staff may read it; anyone else gets
/// 401.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    authorize(StudentAction::Retrieve, &user)?;

    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;

    if !can_view_student(user.user_id, user.is_staff, student.user_id) {
        tracing::warn!(student_id = id, user_id = user.user_id, "Student read refused");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Not allowed to view this student".into(),
        )));
    }

    Ok(Json(student))
}

/// PUT /api/v1/students/{id}
///
/// Accepted without effect; responds with an empty object.
pub async fn update(user: AuthUser, Path(id): Path<DbId>) -> AppResult<Json<Value>> {
    accept_without_change(StudentAction::Update, &user, id)
}

/// PATCH /api/v1/students/{id}
///
/// Same as [`update`].
pub async fn partial_update(user: AuthUser, Path(id): Path<DbId>) -> AppResult<Json<Value>> {
    accept_without_change(StudentAction::PartialUpdate, &user, id)
}

/// DELETE /api/v1/students/{id}
///
/// Accepted without effect for staff; responds with an empty object.
pub async fn delete(user: AuthUser, Path(id): Path<DbId>) -> AppResult<Json<Value>> {
    accept_without_change(StudentAction::Destroy, &user, id)
}

fn accept_without_change(action: StudentAction, user: &AuthUser, id: DbId) -> AppResult<Json<Value>> {
    authorize(action, user)?;
    tracing::debug!(
        student_id = id,
        user_id = user.user_id,
        action = action.as_str(),
        "Student write accepted, no changes applied"
    );
    Ok(Json(json!({})))
}
