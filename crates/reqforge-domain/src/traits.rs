//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline core and the
//! collaborators it treats as black boxes. Implementations live in other
//! crates.

use crate::{Chunk, Summary};

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (reqforge-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for a system/user prompt pair
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error>;

    /// Model identifier recorded on produced summaries
    fn model_name(&self) -> &str;
}

/// Trait for turning chunks into summaries
///
/// Implementations must return exactly one summary per chunk, in order, and
/// must absorb their own failures (substituting a stub summary) rather than
/// abort the pipeline.
pub trait Summarizer {
    /// Summarize each chunk
    fn summarize(&self, chunks: &[Chunk]) -> Vec<Summary>;
}
