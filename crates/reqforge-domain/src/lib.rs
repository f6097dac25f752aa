//! Reqforge Domain Layer
//!
//! Records and trait seams shared by every stage of the requirement pipeline.
//!
//! ## Key Concepts
//!
//! - **Artifact**: one extracted unit of document content (text paragraph,
//!   table, figure) with page/bbox provenance
//! - **MergedUnit**: an artifact flattened to display text, in page order
//! - **Chunk**: a bounded-size text window handed to summarization
//! - **Summary**: the summarizer's record for one chunk
//! - **RequirementUnit**: the terminal, schema-complete requirement record
//! - **CompatibilityMatrix**: directed command sequencing relation
//!
//! ## Data Flow
//!
//! ```text
//! Artifacts → MergedUnit[] → Chunk[] → Summary[] → RequirementUnit[]
//! ```
//!
//! This crate holds no pipeline logic. Stage implementations live in
//! `reqforge-pipeline`, `reqforge-commands` and `reqforge-llm`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod chunk;
pub mod compatibility;
pub mod requirement;
pub mod serde_util;
pub mod structured;
pub mod summary;
pub mod traits;
pub mod unit;

// Re-exports for convenience
pub use artifact::{ArtifactSet, BBox, FigureArtifact, TableArtifact, TextArtifact};
pub use chunk::{Chunk, ChunkMetadata};
pub use compatibility::{CompatibilityAttachment, CompatibilityMatrix, CompatibilityState};
pub use requirement::{CommandRef, RequirementUnit};
pub use structured::{ChunkSource, StructuredChunk};
pub use summary::Summary;
pub use unit::MergedUnit;
