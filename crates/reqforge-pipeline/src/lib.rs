//! Reqforge Pipeline
//!
//! Merges extracted artifacts, windows them into summarization-sized chunks,
//! and assembles summarized chunks into requirement units.
//!
//! # Architecture
//!
//! ```text
//! ArtifactSet → merge_artifacts → TextWindowChunker → (Summarizer) → assemble_requirements
//! ```
//!
//! Every stage is a pure function of its inputs. Nothing here performs I/O,
//! and nothing here fails on document content: missing pages default to 0,
//! unreadable confidences default, mismatched chunk/summary counts truncate.
//!
//! # Example Usage
//!
//! ```
//! use reqforge_domain::{ArtifactSet, Summary, TextArtifact};
//! use reqforge_pipeline::{assemble_requirements, merge_artifacts, ChunkingConfig, TextWindowChunker};
//!
//! let artifacts = ArtifactSet {
//!     text: vec![TextArtifact::new(1, "The device shall enter self refresh after CMD_SRE.")],
//!     ..Default::default()
//! };
//!
//! let units = merge_artifacts(&artifacts);
//! let chunker = TextWindowChunker::from_config(&ChunkingConfig::default());
//! let chunks = chunker.chunk(&units);
//!
//! let summaries = vec![Summary::default(); chunks.len()];
//! let requirements = assemble_requirements(&chunks, &summaries);
//!
//! assert_eq!(requirements[0].id, "REQ-0001");
//! assert_eq!(requirements[0].evidence.start_page, 1);
//! ```

#![warn(missing_docs)]

mod assembly;
mod chunking;
mod config;
mod error;
mod merge;

#[cfg(test)]
mod tests;

pub use assembly::{assemble_requirements, requirement_id, ASSEMBLY_DEFAULT_CONFIDENCE};
pub use chunking::TextWindowChunker;
pub use config::ChunkingConfig;
pub use error::PipelineError;
pub use merge::{flatten_table, merge_artifacts};
