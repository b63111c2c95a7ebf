//! Shared query parameter parsing for API handlers.
//!
//! Handlers take the raw pairs (`Query<QueryPairs>`) rather than a struct so
//! that repeatable keys such as `?expand=book&expand=course` survive
//! deserialization.

use learning_core::project::Expansions;
use learning_core::types::DbId;
use learning_db::models::project::ProjectFilter;

use crate::error::AppError;

/// Raw `key=value` pairs of a query string, in order, duplicates kept.
pub type QueryPairs = Vec<(String, String)>;

/// Collect every `expand` value into an [`Expansions`] set.
pub fn expansions(pairs: &[(String, String)]) -> Expansions {
    Expansions::from_values(
        pairs
            .iter()
            .filter(|(key, _)| key == "expand")
            .map(|(_, value)| value.as_str()),
    )
}

/// Parameters accepted by `GET /projects`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectListParams {
    pub filter: ProjectFilter,
    pub expand: Expansions,
}

impl ProjectListParams {
    /// Parse `bookId`, `courseId`, and `expand` from the query pairs.
    ///
    /// When a filter key repeats, the last value wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, AppError> {
        Ok(Self {
            filter: ProjectFilter {
                book_id: last_id(pairs, "bookId")?,
                course_id: last_id(pairs, "courseId")?,
            },
            expand: expansions(pairs),
        })
    }
}

fn last_id(pairs: &[(String, String)], key: &str) -> Result<Option<DbId>, AppError> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, value)| {
            value
                .trim()
                .parse::<DbId>()
                .map_err(|_| AppError::BadRequest(format!("{key} must be an integer id")))
        })
        .transpose()
}
