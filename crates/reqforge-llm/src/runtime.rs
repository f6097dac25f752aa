//! Blocking bridge and retry policy shared by the HTTP providers

use crate::LlmError;
use std::future::Future;
use std::time::Duration;

/// Run an async provider call to completion on a private current-thread runtime
pub(crate) fn block_on<F, T>(future: F) -> Result<T, LlmError>
where
    F: Future<Output = Result<T, LlmError>>,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LlmError::Setup(format!("Failed to start runtime: {}", e)))?
        .block_on(future)
}

/// Exponential backoff: 1s, 2s, 4s, ...
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt.saturating_sub(1)))
}

/// HTTP client with a request timeout; falls back to reqwest defaults
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(4), Duration::from_secs(8));
    }

    #[test]
    fn test_block_on_propagates_errors() {
        let result: Result<(), LlmError> =
            block_on(async { Err(LlmError::Other("boom".to_string())) });
        assert!(matches!(result, Err(LlmError::Other(_))));
    }
}
