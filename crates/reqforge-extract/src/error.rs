//! Error types for extraction

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while producing artifacts
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input file does not exist
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Neither a PDF nor a bundle was supplied
    #[error("No input: supply a PDF path or an artifact bundle")]
    NoInput,

    /// File could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// PDF text layer could not be extracted
    #[error("PDF extraction failed for {}: {message}", path.display())]
    Pdf {
        /// PDF being read
        path: PathBuf,
        /// Backend message
        message: String,
    },

    /// Artifact bundle is not valid JSON of the expected shape
    #[error("Invalid artifact bundle {}: {source}", path.display())]
    Bundle {
        /// Bundle being read
        path: PathBuf,
        /// Parser diagnostic
        #[source]
        source: serde_json::Error,
    },
}
