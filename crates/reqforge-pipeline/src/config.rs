//! Configuration for the chunker

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Character budget for summarization windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Seal a window before it would exceed this many characters
    pub max_characters: usize,

    /// Trailing characters carried into the next window
    pub overlap_characters: usize,
}

impl ChunkingConfig {
    /// Validate the configuration
    ///
    /// An overlap as large as the budget would let a carried tail alone fill
    /// the next window, so it must stay strictly below `max_characters`.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.max_characters == 0 {
            return Err(PipelineError::Config(
                "max_characters must be greater than 0".to_string(),
            ));
        }
        if self.overlap_characters >= self.max_characters {
            return Err(PipelineError::Config(format!(
                "overlap_characters ({}) must be smaller than max_characters ({})",
                self.overlap_characters, self.max_characters
            )));
        }
        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_characters: 2_000,
            overlap_characters: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ChunkingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_characters, 2000);
        assert_eq!(config.overlap_characters, 200);
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = ChunkingConfig {
            max_characters: 0,
            overlap_characters: 0,
        };
        assert!(matches!(config.validate(), Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_overlap_not_below_budget_rejected() {
        let config = ChunkingConfig {
            max_characters: 100,
            overlap_characters: 100,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_overlap_allowed() {
        let config = ChunkingConfig {
            max_characters: 100,
            overlap_characters: 0,
        };
        assert!(config.validate().is_ok());
    }
}
