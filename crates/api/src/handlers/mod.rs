//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to the repositories in `learning_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod project;
pub mod student;
