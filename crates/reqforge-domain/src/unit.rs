//! Merged units: artifacts flattened into one ordered stream

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One artifact flattened to display text
///
/// A merged sequence is ordered by `(page, kind)`; the kind tie-break is
/// lexical, not semantic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedUnit {
    /// Page the artifact came from
    pub page: u32,

    /// Kind tag (`text`, `table`, `figure`, or a backend-specific tag)
    pub kind: String,

    /// Flattened display text
    pub content: String,

    /// The source artifact record, kept for provenance
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl MergedUnit {
    /// Create a unit with empty provenance metadata
    pub fn new(page: u32, kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            page,
            kind: kind.into(),
            content: content.into(),
            metadata: Map::new(),
        }
    }

    /// Character length of the content (Unicode scalar values)
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
