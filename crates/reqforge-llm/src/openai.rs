//! OpenAI-compatible chat completions provider
//!
//! Works against `api.openai.com` or any server exposing the same
//! `/chat/completions` shape under a custom base URL.

use crate::runtime::{backoff_delay, block_on, http_client};
use crate::LlmError;
use reqforge_domain::traits::LlmProvider;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default timeout for chat completion requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts per request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Chat completions provider with bearer authentication
pub struct OpenAiProvider {
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    max_retries: u32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Provider for `model` authenticated with `api_key`
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: model.into(),
            temperature: 0.2,
            max_tokens: 1024,
            max_retries: DEFAULT_MAX_RETRIES,
            client: http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Use a different base URL; an empty string keeps the default
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        if !api_base.trim().is_empty() {
            self.api_base = api_base.trim().trim_end_matches('/').to_string();
        }
        self
    }

    /// Set sampling temperature and completion budget
    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    fn headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", self.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth)
                .map_err(|_| LlmError::Setup("API key is not a valid header value".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Request one chat completion, retrying transient failures
    pub async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        let headers = self.headers()?;
        let body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };
        let url = self.endpoint();

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .headers(headers.clone())
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let parsed: ChatResponse = response.json().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        return Ok(parsed
                            .choices
                            .into_iter()
                            .next()
                            .and_then(|choice| choice.message.content)
                            .unwrap_or_default());
                    }
                    match status {
                        StatusCode::NOT_FOUND => {
                            return Err(LlmError::ModelNotAvailable(self.model.clone()))
                        }
                        StatusCode::TOO_MANY_REQUESTS => {
                            last_error = Some(LlmError::RateLimitExceeded);
                        }
                        _ if status.is_client_error() => {
                            let text = response
                                .text()
                                .await
                                .unwrap_or_else(|_| "<body unavailable>".to_string());
                            return Err(LlmError::Communication(format!("HTTP {}: {}", status, text)));
                        }
                        _ => {
                            let text = response
                                .text()
                                .await
                                .unwrap_or_else(|_| "<body unavailable>".to_string());
                            last_error =
                                Some(LlmError::Communication(format!("HTTP {}: {}", status, text)));
                        }
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = backoff_delay(attempts);
                warn!(attempt = attempts, ?delay, "Chat completion failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProvider for OpenAiProvider {
    type Error = LlmError;

    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        debug!(model = %self.model, "Chat completion");
        block_on(async { self.generate(system_prompt, user_prompt).await })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
