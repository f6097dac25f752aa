//! `[llm]` configuration and summarizer selection

use crate::prompt::{DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_TEMPLATE};
use crate::summarizer::{LlmSummarizer, StubSummarizer};
use crate::{OllamaProvider, OpenAiProvider};
use reqforge_domain::traits::Summarizer;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Settings for the summarization stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// When false every chunk gets the stub summary
    pub enable_summary: bool,

    /// `openai`, `ollama` or `stub`
    pub provider: String,

    /// Model identifier passed to the provider
    pub model: String,

    /// Environment variable holding the API key (openai only)
    pub api_key_env: String,

    /// Base URL (openai) or endpoint (ollama); empty uses the provider default
    pub api_base: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Completion token budget
    pub max_tokens: u32,

    /// Attempts per chunk before falling back
    pub max_retries: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// System prompt
    pub system_prompt: String,

    /// User prompt with `{chunk_index}`, `{start_page}` and `{chunk_text}`
    pub user_prompt_template: String,

    /// Terms masked in chunk text before it is sent
    pub redact_terms: Vec<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enable_summary: true,
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_base: String::new(),
            temperature: 0.2,
            max_tokens: 1024,
            max_retries: 3,
            timeout_secs: 60,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            user_prompt_template: DEFAULT_USER_TEMPLATE.to_string(),
            redact_terms: Vec::new(),
        }
    }
}

/// Select a summarizer for `config`, reading API keys from the environment
pub fn build_summarizer(config: &LlmConfig) -> Box<dyn Summarizer> {
    build_summarizer_with_env(config, |name| std::env::var(name).ok())
}

/// Select a summarizer for `config`, resolving API keys through `env`
///
/// Disabled summarization, the `stub` provider, an unknown provider and a
/// missing API key all yield [`StubSummarizer`].
pub fn build_summarizer_with_env<F>(config: &LlmConfig, env: F) -> Box<dyn Summarizer>
where
    F: Fn(&str) -> Option<String>,
{
    if !config.enable_summary {
        info!("Summarization disabled; using stub summaries");
        return Box::new(StubSummarizer);
    }

    let timeout = Duration::from_secs(config.timeout_secs);
    match config.provider.trim().to_lowercase().as_str() {
        "openai" => {
            let Some(api_key) = env(&config.api_key_env).filter(|k| !k.trim().is_empty()) else {
                warn!(
                    variable = %config.api_key_env,
                    "API key not set; using stub summaries"
                );
                return Box::new(StubSummarizer);
            };
            let provider = OpenAiProvider::new(api_key, &config.model)
                .with_api_base(&config.api_base)
                .with_sampling(config.temperature, config.max_tokens)
                .with_max_retries(config.max_retries)
                .with_timeout(timeout);
            info!(model = %config.model, "Summarizing with OpenAI-compatible provider");
            Box::new(LlmSummarizer::new(provider, config))
        }
        "ollama" => {
            let endpoint = if config.api_base.trim().is_empty() {
                crate::ollama::DEFAULT_ENDPOINT
            } else {
                config.api_base.trim()
            };
            let provider = OllamaProvider::new(endpoint, &config.model)
                .with_temperature(config.temperature)
                .with_max_retries(config.max_retries)
                .with_timeout(timeout);
            info!(model = %config.model, endpoint, "Summarizing with Ollama");
            Box::new(LlmSummarizer::new(provider, config))
        }
        "stub" => Box::new(StubSummarizer),
        other => {
            warn!(provider = other, "Unsupported LLM provider; using stub summaries");
            Box::new(StubSummarizer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::STUB_MARKER;
    use reqforge_domain::Chunk;

    fn one_chunk() -> Vec<Chunk> {
        vec![Chunk {
            text: "tRFC applies".to_string(),
            ..Default::default()
        }]
    }

    fn is_stub(summarizer: &dyn Summarizer) -> bool {
        summarizer.summarize(&one_chunk())[0].llm_prompt.as_deref() == Some(STUB_MARKER)
    }

    #[test]
    fn test_defaults() {
        let config = LlmConfig::default();
        assert!(config.enable_summary);
        assert_eq!(config.provider, "openai");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn test_partial_toml() {
        let config: LlmConfig = toml::from_str("provider = \"ollama\"\nmodel = \"llama3\"").unwrap();
        assert_eq!(config.provider, "ollama");
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_disabled_uses_stub() {
        let config = LlmConfig {
            enable_summary: false,
            ..Default::default()
        };
        assert!(is_stub(build_summarizer_with_env(&config, |_| Some("k".into())).as_ref()));
    }

    #[test]
    fn test_missing_key_uses_stub() {
        let summarizer = build_summarizer_with_env(&LlmConfig::default(), |_| None);
        assert!(is_stub(summarizer.as_ref()));
    }

    #[test]
    fn test_unknown_provider_uses_stub() {
        let config = LlmConfig {
            provider: "bard".to_string(),
            ..Default::default()
        };
        assert!(is_stub(build_summarizer_with_env(&config, |_| None).as_ref()));
    }
}
