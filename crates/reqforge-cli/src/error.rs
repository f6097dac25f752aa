//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chunking budget rejected
    #[error(transparent)]
    Pipeline(#[from] reqforge_pipeline::PipelineError),

    /// Command pattern or CSV failure
    #[error(transparent)]
    Commands(#[from] reqforge_commands::CommandError),

    /// Artifact extraction failure
    #[error(transparent)]
    Extract(#[from] reqforge_extract::ExtractError),

    /// Catalog, review or snapshot failure
    #[error(transparent)]
    Catalog(#[from] reqforge_catalog::CatalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Log sink could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
