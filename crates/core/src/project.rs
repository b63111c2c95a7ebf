//! Project rules: advanced-project validation and serializer expansions.
//!
//! An advanced project carries a description and a template URL stored in a
//! separate info record. Both are mandatory once the advanced flag is set.

use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of the description and template URL, in characters.
/// Matches the `VARCHAR(256)` columns of `project_infos`.
pub const MAX_INFO_FIELD_LENGTH: u64 = 256;

/// Message returned when an advanced project lacks its info fields.
pub const ADVANCED_FIELDS_REQUIRED: &str =
    "Description and Template URL are required for advanced projects";

/// `expand` value that inlines the related book.
pub const EXPAND_BOOK: &str = "book";

/// `expand` value that inlines the related course.
pub const EXPAND_COURSE: &str = "course";

// ---------------------------------------------------------------------------
// Advanced project fields
// ---------------------------------------------------------------------------

/// Supplementary metadata stored for an advanced project.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AdvancedProjectFields {
    #[validate(length(max = MAX_INFO_FIELD_LENGTH))]
    pub description: String,
    #[validate(length(max = MAX_INFO_FIELD_LENGTH))]
    pub template_url: String,
}

/// Whether a nullable advanced flag means "advanced".
///
/// Only an explicit `true` counts; `false` and absent are equivalent.
pub fn is_advanced(flag: Option<bool>) -> bool {
    flag == Some(true)
}

/// Check the advanced-project requirements for a create or update request.
///
/// Returns the info fields to persist when the project is advanced, `None`
/// when it is not. Description and template URL are ignored for
/// non-advanced projects.
pub fn validate_advanced_fields(
    is_advanced_project: Option<bool>,
    description: Option<&str>,
    template_url: Option<&str>,
) -> Result<Option<AdvancedProjectFields>, CoreError> {
    if !is_advanced(is_advanced_project) {
        return Ok(None);
    }

    let (Some(description), Some(template_url)) = (description, template_url) else {
        return Err(CoreError::Validation(ADVANCED_FIELDS_REQUIRED.to_string()));
    };

    let fields = AdvancedProjectFields {
        description: description.to_string(),
        template_url: template_url.to_string(),
    };

    if let Err(errors) = fields.validate() {
        let mut names: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort();
        return Err(CoreError::Validation(format!(
            "{} must be at most {MAX_INFO_FIELD_LENGTH} characters",
            names.join(", ")
        )));
    }

    Ok(Some(fields))
}

// ---------------------------------------------------------------------------
// Expansions
// ---------------------------------------------------------------------------

/// Which related records a serialized project should inline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expansions {
    pub book: bool,
    pub course: bool,
}

impl Expansions {
    /// Build from the values of a repeatable `expand` parameter.
    ///
    /// Unknown values are ignored.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        values
            .into_iter()
            .fold(Self::default(), |mut acc, value| {
                match value.trim() {
                    EXPAND_BOOK => acc.book = true,
                    EXPAND_COURSE => acc.course = true,
                    _ => {}
                }
                acc
            })
    }
}
