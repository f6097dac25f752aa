//! Reqforge LLM Summarization Layer
//!
//! Pluggable LLM providers and the summarizers built on them.
//!
//! # Architecture
//!
//! Providers implement the `LlmProvider` trait from `reqforge-domain`;
//! summarizers implement `Summarizer`. The pipeline only ever sees a
//! `Summarizer`, which always returns one summary per chunk: any provider
//! failure degrades to the deterministic stub summary for that chunk.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//! - `OpenAiProvider`: OpenAI-compatible chat completions
//!
//! # Examples
//!
//! ```
//! use reqforge_domain::traits::{LlmProvider, Summarizer};
//! use reqforge_domain::Chunk;
//! use reqforge_llm::{LlmConfig, LlmSummarizer, MockProvider};
//!
//! let provider = MockProvider::new(r#"{"title": "Init timing", "confidence": 0.9}"#);
//! assert!(provider.generate("system", "user").is_ok());
//!
//! let summarizer = LlmSummarizer::new(provider, &LlmConfig::default());
//! let chunks = vec![Chunk { text: "tINIT must exceed 200us".into(), ..Default::default() }];
//! let summaries = summarizer.summarize(&chunks);
//! assert_eq!(summaries[0].title.as_deref(), Some("Init timing"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
pub mod mock;
pub mod ollama;
pub mod openai;
pub mod parser;
pub mod prompt;
mod runtime;
pub mod summarizer;

pub use config::{build_summarizer, build_summarizer_with_env, LlmConfig};
pub use error::LlmError;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use parser::{parse_summary_response, strip_code_fences};
pub use prompt::{redact_terms, render_user_prompt, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_TEMPLATE};
pub use summarizer::{fallback_summary, LlmSummarizer, StubSummarizer};
