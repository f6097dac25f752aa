//! Summaries returned by the summarizer boundary

use crate::chunk::ChunkMetadata;
use crate::serde_util::{lenient_confidence, lenient_pages};
use serde::{Deserialize, Serialize};

/// Summarizer output for one chunk, order-aligned with the chunk list
///
/// Every field is optional on the wire. Consumers choose their own
/// fallbacks, so nothing here is defaulted to a "real" value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Short requirement title
    #[serde(default)]
    pub title: Option<String>,

    /// Requirement description
    #[serde(default)]
    pub description: Option<String>,

    /// Pages the summary claims to cover (int or list on the wire)
    #[serde(default, deserialize_with = "lenient_pages")]
    pub source_pages: Vec<u32>,

    /// Confidence in `[0, 1]`; `None` when absent or not numeric
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: Option<f64>,

    /// Provenance echoed back by the summarizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<ChunkMetadata>,

    /// Prompt sent to the model (`<stubbed>` for fallback summaries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_prompt: Option<String>,

    /// Raw model response (`<stubbed>` for fallback summaries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_response: Option<String>,

    /// Model that produced the summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_summary_fields_degrade() {
        let summary: Summary = serde_json::from_value(json!({
            "title": null,
            "source_pages": 12,
            "confidence": "not a number"
        }))
        .unwrap();
        assert!(summary.title.is_none());
        assert!(summary.description.is_none());
        assert_eq!(summary.source_pages, vec![12]);
        assert!(summary.confidence.is_none());
    }

    #[test]
    fn test_numeric_string_confidence() {
        let summary: Summary = serde_json::from_value(json!({"confidence": "0.9"})).unwrap();
        assert_eq!(summary.confidence, Some(0.9));
    }
}
