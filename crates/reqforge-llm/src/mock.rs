//! Deterministic provider for tests and offline runs

use crate::LlmError;
use reqforge_domain::traits::LlmProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network
/// calls. Responses are keyed by the user prompt.
///
/// # Examples
///
/// ```
/// use reqforge_llm::MockProvider;
/// use reqforge_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("sys", "any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.generate("sys", "prompt1").unwrap(), "response1");
/// assert_eq!(provider.generate("sys", "prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    model: String,
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            model: "mock".to_string(),
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Report `model` as the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Add a specific response for a given user prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prompt.into(), Some(response.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Configure to return an error for a specific user prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prompt.into(), None);
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        match responses.get(user_prompt) {
            Some(Some(response)) => Ok(response.clone()),
            Some(None) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
