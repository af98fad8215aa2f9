//! Per-operation input descriptors for the community resource.
//!
//! Each repository operation takes exactly one of these DTOs. They are built
//! by the HTTP layer from request data and cannot be changed afterwards.

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::DbId;

/// Query keys accepted as title filters (`?titles[]=A&titles[]=B`).
const TITLE_QUERY_KEYS: &[&str] = &["titles[]", "titles"];

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// Filter for listing communities.
///
/// Absent or empty `titles` means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadDto {
    titles: Option<Vec<String>>,
}

impl ReadDto {
    pub fn new(titles: Option<Vec<String>>) -> Self {
        Self { titles }
    }

    /// Collect title filters from decoded query-string pairs.
    ///
    /// Keys other than `titles[]` / `titles` are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let titles: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| TITLE_QUERY_KEYS.contains(&key.as_ref()))
            .map(|(_, value)| value.into())
            .collect();

        if titles.is_empty() {
            Self::default()
        } else {
            Self::new(Some(titles))
        }
    }

    pub fn titles(&self) -> Option<&[String]> {
        self.titles.as_deref()
    }

    /// Build one `LIKE` pattern per title, or `None` when no filter applies.
    ///
    /// Each pattern matches the title as a literal, case-sensitive substring.
    /// Titles containing NUL can never match a stored title and are dropped,
    /// so a filter made only of such titles yields an empty pattern list.
    pub fn title_patterns(&self) -> Option<Vec<String>> {
        match self.titles.as_deref() {
            None | Some([]) => None,
            Some(titles) => Some(
                titles
                    .iter()
                    .filter(|t| !t.contains('\0'))
                    .map(|t| format!("%{}%", escape_like(t)))
                    .collect(),
            ),
        }
    }
}

/// Escape `LIKE` metacharacters using Postgres' default escape character.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Postgres `text` cannot hold NUL characters.
fn storable_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character")
            .with_message(Cow::Borrowed("must not contain NUL characters")));
    }
    Ok(())
}

fn validation_error(errors: validator::ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}

// ---------------------------------------------------------------------------
// Id
// ---------------------------------------------------------------------------

/// Identifies a single community.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdDto {
    id: DbId,
}

impl IdDto {
    pub fn new(id: DbId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> DbId {
        self.id
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Input for creating a community. Both fields must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateDto {
    #[validate(
        length(min = 1, message = "title must not be empty"),
        custom(function = "storable_text")
    )]
    title: String,
    #[validate(
        length(min = 1, message = "description must not be empty"),
        custom(function = "storable_text")
    )]
    description: String,
}

impl CreateDto {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self, CoreError> {
        let dto = Self {
            title: title.into(),
            description: description.into(),
        };
        dto.validate().map_err(validation_error)?;
        Ok(dto)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Input for overwriting a community's title and description.
///
/// Empty strings are accepted; the only rule is that both fields are
/// storable as Postgres text.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UpdateDto {
    id: DbId,
    #[validate(custom(function = "storable_text"))]
    title: String,
    #[validate(custom(function = "storable_text"))]
    description: String,
}

impl UpdateDto {
    pub fn new(
        id: DbId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let dto = Self {
            id,
            title: title.into(),
            description: description.into(),
        };
        dto.validate().map_err(validation_error)?;
        Ok(dto)
    }

    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
