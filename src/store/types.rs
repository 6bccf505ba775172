//! Snippet record types.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A stored code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Snippet {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Free-form title.
    #[schema(example = "Hello World (Go)")]
    pub title: String,
    /// Source code, stored verbatim.
    pub code: String,
    /// Free-form description.
    #[schema(example = "A simple Go program.")]
    pub description: String,
}

impl Snippet {
    /// Build a snippet from a payload and an assigned id.
    pub fn from_payload(id: i64, payload: NewSnippet) -> Self {
        Self {
            id,
            title: payload.title,
            code: payload.code,
            description: payload.description,
        }
    }
}

/// Client payload for create and update.
///
/// Missing fields default to empty strings. An `id` in the body must be an
/// integer (or null) but its value is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewSnippet {
    /// Accepted for shape checking only; the store assigns ids.
    #[serde(rename = "id")]
    #[schema(value_type = Option<i64>)]
    _id: IgnoredId,
    /// Free-form title.
    pub title: String,
    /// Source code.
    pub code: String,
    /// Free-form description.
    pub description: String,
}

impl NewSnippet {
    /// Convenience constructor.
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            _id: IgnoredId,
            title: title.into(),
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Client-supplied id: must parse as `Option<i64>`, then is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
struct IgnoredId;

impl<'de> Deserialize<'de> for IgnoredId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer).map(|_| IgnoredId)
    }
}
