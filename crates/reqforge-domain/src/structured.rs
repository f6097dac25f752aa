//! Structured chunk records published alongside requirements in the catalog

use crate::artifact::BBox;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a structured chunk came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkSource {
    /// Source document path
    pub pdf: String,

    /// Page number
    pub page: u32,

    /// Location on the page, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,
}

/// One merged artifact in its catalog form
///
/// `payload` depends on `kind`: `{text}` for text, `{rows, text}` for tables,
/// `{caption, meta}` for figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredChunk {
    /// Artifact kind
    #[serde(rename = "type")]
    pub kind: String,

    /// Stable identifier within the catalog
    #[serde(default)]
    pub id: Option<String>,

    /// Document/page/bbox provenance
    pub source: ChunkSource,

    /// Kind-specific content
    #[serde(default)]
    pub payload: Value,
}
