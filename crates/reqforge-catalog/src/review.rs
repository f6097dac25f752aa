//! The human review document

use crate::catalog::write_yaml;
use crate::error::Result;
use reqforge_domain::{ChunkMetadata, RequirementUnit, StructuredChunk};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Number of structured chunks listed in the overview sample
const OVERVIEW_SAMPLE: usize = 20;

/// Settings for the `[review]` section that shape the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOptions {
    /// Review schema version
    pub schema_version: String,
    /// Include `source_pages` per requirement
    pub include_traceability: bool,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            schema_version: "review-0.1.0".to_string(),
            include_traceability: true,
        }
    }
}

/// Run identification block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMetadata {
    /// Review schema version
    pub schema_version: String,
    /// RFC 3339 UTC timestamp
    pub generated_at: String,
    /// Run identifier
    pub run_id: String,
    /// Source document path
    pub source_pdf: String,
}

/// Totals block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Number of requirements reviewed
    pub total_requirements: usize,
}

/// One requirement as presented to a reviewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// Requirement id
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Confidence
    pub confidence: f64,
    /// Pages, present when traceability is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_pages: Option<Vec<u32>>,
    /// Chunk provenance
    pub evidence: ChunkMetadata,
}

/// Sample line of the chunk overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkOverview {
    /// Chunk kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Page
    pub page: u32,
    /// Structured chunk id
    pub id: Option<String>,
}

/// Appendix listing the structured chunks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunksOverview {
    /// Total structured chunks
    pub count: usize,
    /// First twenty chunks
    pub sample: Vec<ChunkOverview>,
}

/// Review document written next to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    /// Run identification
    pub metadata: ReviewMetadata,
    /// Totals
    pub summary: ReviewSummary,
    /// Requirements in catalog order
    pub requirements: Vec<ReviewEntry>,
    /// Structured chunk appendix, when chunks exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks_overview: Option<ChunksOverview>,
}

/// Build the review document for one run
pub fn build_review(
    requirements: &[RequirementUnit],
    chunks: &[StructuredChunk],
    options: &ReviewOptions,
    run_id: &str,
    source_pdf: &str,
    generated_at: &str,
) -> ReviewDocument {
    let entries = requirements
        .iter()
        .map(|req| ReviewEntry {
            id: req.id.clone(),
            title: req.title.clone(),
            description: req.description.clone(),
            confidence: req.confidence,
            source_pages: options.include_traceability.then(|| {
                if req.source_pages.is_empty() {
                    vec![req.evidence.start_page]
                } else {
                    req.source_pages.clone()
                }
            }),
            evidence: req.evidence.clone(),
        })
        .collect();

    let chunks_overview = (!chunks.is_empty()).then(|| ChunksOverview {
        count: chunks.len(),
        sample: chunks
            .iter()
            .take(OVERVIEW_SAMPLE)
            .map(|c| ChunkOverview {
                kind: c.kind.clone(),
                page: c.source.page,
                id: c.id.clone(),
            })
            .collect(),
    });

    ReviewDocument {
        metadata: ReviewMetadata {
            schema_version: options.schema_version.clone(),
            generated_at: generated_at.to_string(),
            run_id: run_id.to_string(),
            source_pdf: source_pdf.to_string(),
        },
        summary: ReviewSummary {
            total_requirements: requirements.len(),
        },
        requirements: entries,
        chunks_overview,
    }
}

/// Write the review document as YAML, creating parent directories
pub fn write_review(review: &ReviewDocument, path: &Path) -> Result<PathBuf> {
    write_yaml(review, path)?;
    info!(path = %path.display(), "Wrote review document");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured_chunks;
    use reqforge_domain::MergedUnit;

    fn requirements() -> Vec<RequirementUnit> {
        vec![
            RequirementUnit {
                id: "REQ-0001".to_string(),
                title: "A".to_string(),
                source_pages: vec![2, 3],
                evidence: ChunkMetadata::opened(2, "text"),
                confidence: 0.5,
                ..Default::default()
            },
            RequirementUnit {
                id: "REQ-0002".to_string(),
                title: "B".to_string(),
                evidence: ChunkMetadata::opened(7, "table"),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_traceability_with_page_fallback() {
        let review = build_review(
            &requirements(),
            &[],
            &ReviewOptions::default(),
            "run_x",
            "spec.pdf",
            "2026-01-01T00:00:00Z",
        );
        assert_eq!(review.summary.total_requirements, 2);
        assert_eq!(review.requirements[0].source_pages, Some(vec![2, 3]));
        assert_eq!(review.requirements[1].source_pages, Some(vec![7]));
        assert!(review.chunks_overview.is_none());
        assert_eq!(review.metadata.schema_version, "review-0.1.0");
    }

    #[test]
    fn test_traceability_off_omits_pages() {
        let options = ReviewOptions {
            include_traceability: false,
            ..Default::default()
        };
        let review = build_review(&requirements(), &[], &options, "r", "p", "t");
        assert!(review.requirements.iter().all(|e| e.source_pages.is_none()));

        let yaml = serde_yaml::to_string(&review).unwrap();
        assert!(!yaml.contains("source_pages"));
    }

    #[test]
    fn test_chunk_overview_samples_twenty() {
        let units: Vec<MergedUnit> = (0..25).map(|p| MergedUnit::new(p, "text", "t")).collect();
        let chunks = structured_chunks(&units, "spec.pdf");
        let review = build_review(&[], &chunks, &ReviewOptions::default(), "r", "p", "t");

        let overview = review.chunks_overview.unwrap();
        assert_eq!(overview.count, 25);
        assert_eq!(overview.sample.len(), 20);
        assert_eq!(overview.sample[19].id.as_deref(), Some("text-0020"));
    }
}
