//! Configuration for command annotation and compatibility inference

use serde::{Deserialize, Serialize};

/// Pattern used when none is configured
pub const DEFAULT_COMMAND_PATTERN: &str = r"\bCMD_[A-Z0-9]+\b";

/// Settings for the `[commands]` section
///
/// Absent keyword lists take the defaults; an explicitly empty positive list
/// means "no positive keywords supplied", which marks every non-negative
/// adjacency as allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Regular expressions recognising command tokens
    pub patterns: Vec<String>,

    /// Cap on commands attached to one requirement
    pub max_per_requirement: usize,

    /// Phrases marking `dst` as a permitted successor of `src`
    pub sequence_positive_keywords: Vec<String>,

    /// Phrases marking `dst` as a forbidden successor of `src`
    pub sequence_negative_keywords: Vec<String>,

    /// Requirement receiving the compatibility matrix
    pub target_requirement_index: usize,

    /// Description stored with the attached matrix
    pub compatibility_description: String,

    /// Display value for pairs without evidence
    pub compatibility_default: String,

    /// Where the sequencing table CSV is written
    pub compatibility_csv_path: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            patterns: vec![DEFAULT_COMMAND_PATTERN.to_string()],
            max_per_requirement: 10,
            sequence_positive_keywords: ["->", "→", "⇒", "then", "after", "followed by"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sequence_negative_keywords: [
                "must not follow",
                "cannot follow",
                "not followed by",
                "should not follow",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            target_requirement_index: 0,
            compatibility_description: "Auto-inferred command transitions".to_string(),
            compatibility_default: "UNKNOWN".to_string(),
            compatibility_csv_path: "artifacts/compatibility_matrix.csv".to_string(),
        }
    }
}
