//! Domain rules for the learning platform.
//!
//! Everything here is pure: no database access, no HTTP. The `db` and `api`
//! crates build on these types and checks.

pub mod error;
pub mod project;
pub mod student_access;
pub mod types;
