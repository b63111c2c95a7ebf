pub mod auth;
pub mod health;
pub mod project;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                  login (public)
///
/// /projects                    list, create (staff)
/// /projects/{id}               get, update, delete (staff)
///
/// /students                    list (staff), create (405)
/// /students/{id}               get (self or staff), update, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/students", student::router())
}
