//! Error types for the pipeline

use thiserror::Error;

/// Errors surfaced by pipeline configuration
///
/// The stages themselves never fail; only a malformed budget is rejected,
/// and only at load time.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Chunking budget is unusable
    #[error("Invalid chunking configuration: {0}")]
    Config(String),
}
