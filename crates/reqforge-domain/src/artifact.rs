//! Extracted artifacts as delivered by extraction backends
//!
//! Backends are external collaborators; the records here only fix the shape
//! the pipeline consumes. Artifacts are read-only for the whole run.

use crate::serde_util::{lenient_page, null_as_default, string_or_none};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Bounding box on a page: `[x0, y0, x1, y1]`
pub type BBox = [f64; 4];

/// A paragraph or text block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextArtifact {
    /// 1-based page number (absent or unusable → 0)
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: u32,

    /// Kind tag used for ordering and chunk metadata
    #[serde(default = "default_text_source", deserialize_with = "text_source")]
    pub source: String,

    /// Paragraph text
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Location on the page, when the backend reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,

    /// Block position on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_index: Option<usize>,
}

/// A table as a row-major grid of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableArtifact {
    /// 1-based page number (absent or unusable → 0)
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: u32,

    /// Kind tag used for ordering and chunk metadata
    #[serde(default = "default_table_source", deserialize_with = "table_source")]
    pub source: String,

    /// Rows of cells; a cell may be a string, number, bool or null
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<Vec<Value>>,

    /// Table position on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_index: Option<usize>,

    /// Location on the page, when the backend reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,

    /// Backend-specific details (engine, accuracy, dimensions)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

/// A figure; only its caption contributes text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureArtifact {
    /// 1-based page number (absent or unusable → 0)
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: u32,

    /// Kind tag used for ordering and chunk metadata
    #[serde(default = "default_figure_source", deserialize_with = "figure_source")]
    pub source: String,

    /// Caption text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Image position on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_index: Option<usize>,

    /// Location on the page, when the backend reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,

    /// Image details (xref, width, height, colorspace)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

/// The three artifact lists produced for one document
///
/// Any list may be missing from a serialized bundle; it then reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactSet {
    /// Text blocks
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: Vec<TextArtifact>,

    /// Tables
    #[serde(default, deserialize_with = "null_as_default")]
    pub table: Vec<TableArtifact>,

    /// Figures
    #[serde(default, deserialize_with = "null_as_default")]
    pub figure: Vec<FigureArtifact>,
}

impl ArtifactSet {
    /// Total number of artifacts across all kinds
    pub fn len(&self) -> usize {
        self.text.len() + self.table.len() + self.figure.len()
    }

    /// True when no backend produced anything
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TextArtifact {
    /// Create a text artifact with the default kind tag
    pub fn new(page: u32, content: impl Into<String>) -> Self {
        Self {
            page,
            source: default_text_source(),
            content: content.into(),
            bbox: None,
            block_index: None,
        }
    }
}

impl TableArtifact {
    /// Create a table artifact with the default kind tag
    pub fn new(page: u32, content: Vec<Vec<Value>>) -> Self {
        Self {
            page,
            source: default_table_source(),
            content,
            table_index: None,
            bbox: None,
            meta: Map::new(),
        }
    }
}

impl FigureArtifact {
    /// Create a figure artifact with the default kind tag
    pub fn new(page: u32, caption: Option<String>) -> Self {
        Self {
            page,
            source: default_figure_source(),
            caption,
            image_index: None,
            bbox: None,
            meta: Map::new(),
        }
    }
}

fn default_text_source() -> String {
    "text".to_string()
}

fn default_table_source() -> String {
    "table".to_string()
}

fn default_figure_source() -> String {
    "figure".to_string()
}

// A null or non-string source falls back to the artifact's own kind.
fn text_source<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_or_none(deserializer)?.unwrap_or_else(default_text_source))
}

fn table_source<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_or_none(deserializer)?.unwrap_or_else(default_table_source))
}

fn figure_source<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_or_none(deserializer)?.unwrap_or_else(default_figure_source))
}
