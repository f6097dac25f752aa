//! Chunks: bounded-size windows sent to summarization

use serde::{Deserialize, Serialize};

/// Provenance of a chunk
///
/// `start_page` is fixed when the chunk is opened and is not updated as
/// later units (possibly from later pages) are appended. `kinds` lists each
/// contributing kind once, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Page of the unit that opened the chunk
    #[serde(default)]
    pub start_page: u32,

    /// Kinds of the contributing units
    #[serde(default)]
    pub kinds: Vec<String>,
}

impl ChunkMetadata {
    /// Metadata for a chunk opened by a unit of `kind` on `start_page`
    pub fn opened(start_page: u32, kind: impl Into<String>) -> Self {
        Self {
            start_page,
            kinds: vec![kind.into()],
        }
    }

    /// Record a contributing kind if not already present
    pub fn add_kind(&mut self, kind: &str) {
        if !self.kinds.iter().any(|k| k == kind) {
            self.kinds.push(kind.to_string());
        }
    }
}

/// One text window with its provenance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Window text, trimmed of surrounding whitespace
    pub text: String,

    /// Page/kind provenance
    #[serde(default)]
    pub metadata: ChunkMetadata,
}
