//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the DTOs used to insert or update it.

pub mod book;
pub mod course;
pub mod project;
pub mod project_info;
pub mod student;
pub mod user;
