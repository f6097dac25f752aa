//! Error types for command annotation

use thiserror::Error;

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;

/// Errors that can occur in the command layer
///
/// A malformed pattern is a caller defect and is reported when the matcher
/// is built, before any document is processed.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A user-supplied command pattern does not compile
    #[error("Invalid command pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler diagnostic
        #[source]
        source: regex::Error,
    },

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
