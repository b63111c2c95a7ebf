//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Helpers that must share a
//! caller's transaction take `&mut Transaction` instead.

pub mod book_repo;
pub mod course_repo;
pub mod project_info_repo;
pub mod project_repo;
pub mod student_repo;
pub mod user_repo;

pub use book_repo::BookRepo;
pub use course_repo::CourseRepo;
pub use project_info_repo::ProjectInfoRepo;
pub use project_repo::ProjectRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;
