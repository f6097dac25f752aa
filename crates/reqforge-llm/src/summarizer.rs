//! Summarizer implementations
//!
//! [`StubSummarizer`] is deterministic and offline. [`LlmSummarizer`] asks a
//! provider per chunk and substitutes the stub summary for any chunk whose
//! call fails, so the output is always order-aligned with the input.

use crate::config::LlmConfig;
use crate::parser::{fallback_title, leading_chars, parse_summary_response, DESCRIPTION_CHARS};
use crate::prompt::render_user_prompt;
use reqforge_domain::traits::{LlmProvider, Summarizer};
use reqforge_domain::{Chunk, Summary};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Confidence of stub summaries
pub const STUB_CONFIDENCE: f64 = 0.5;

/// Marker stored as prompt and response of stub summaries
pub const STUB_MARKER: &str = "<stubbed>";

/// Deterministic summary for the `index`-th chunk (1-based)
pub fn fallback_summary(chunk: &Chunk, index: usize) -> Summary {
    Summary {
        title: Some(fallback_title(chunk, index)),
        description: Some(leading_chars(&chunk.text, DESCRIPTION_CHARS)),
        source_pages: vec![chunk.metadata.start_page],
        confidence: Some(STUB_CONFIDENCE),
        evidence: Some(chunk.metadata.clone()),
        llm_prompt: Some(STUB_MARKER.to_string()),
        llm_response: Some(STUB_MARKER.to_string()),
        model: None,
    }
}

/// Summarizer that never calls a model
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSummarizer;

impl Summarizer for StubSummarizer {
    fn summarize(&self, chunks: &[Chunk]) -> Vec<Summary> {
        info!(chunks = chunks.len(), "Using stub summaries");
        chunks
            .iter()
            .enumerate()
            .map(|(idx, chunk)| fallback_summary(chunk, idx + 1))
            .collect()
    }
}

/// Summarizer backed by an [`LlmProvider`]
pub struct LlmSummarizer<P> {
    provider: P,
    system_prompt: String,
    user_template: String,
    redact_terms: Vec<String>,
}

impl<P> LlmSummarizer<P>
where
    P: LlmProvider,
    P::Error: Display,
{
    /// Wrap `provider` with the prompts and redaction list of `config`
    pub fn new(provider: P, config: &LlmConfig) -> Self {
        Self {
            provider,
            system_prompt: config.system_prompt.clone(),
            user_template: config.user_prompt_template.clone(),
            redact_terms: config.redact_terms.clone(),
        }
    }

    /// The wrapped provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn summarize_one(&self, chunk: &Chunk, index: usize) -> Summary {
        let prompt = render_user_prompt(&self.user_template, index, chunk, &self.redact_terms);

        match self.provider.generate(&self.system_prompt, &prompt) {
            Ok(response) => {
                let mut summary = parse_summary_response(&response, chunk, index);
                summary.llm_prompt = Some(prompt);
                summary.llm_response = Some(response);
                summary.model = Some(self.provider.model_name().to_string());
                summary
            }
            Err(e) => {
                warn!(
                    chunk = index,
                    model = self.provider.model_name(),
                    error = %e,
                    "Summarization failed; using stub summary"
                );
                fallback_summary(chunk, index)
            }
        }
    }
}

impl<P> Summarizer for LlmSummarizer<P>
where
    P: LlmProvider,
    P::Error: Display,
{
    fn summarize(&self, chunks: &[Chunk]) -> Vec<Summary> {
        debug!(
            chunks = chunks.len(),
            model = self.provider.model_name(),
            "Summarizing chunks"
        );
        chunks
            .iter()
            .enumerate()
            .map(|(idx, chunk)| self.summarize_one(chunk, idx + 1))
            .collect()
    }
}
