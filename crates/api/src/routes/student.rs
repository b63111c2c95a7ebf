//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (always 405)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (no-op)
/// PATCH  /{id}    -> partial_update (no-op)
/// DELETE /{id}    -> delete (no-op)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list).post(student::create))
        .route(
            "/{id}",
            get(student::get_by_id)
                .put(student::update)
                .patch(student::partial_update)
                .delete(student::delete),
        )
}
