//! Assemble summarized chunks into requirement units

use reqforge_domain::{Chunk, RequirementUnit, Summary};
use tracing::{debug, warn};

/// Confidence used when a summary carries none (or an unreadable one)
pub const ASSEMBLY_DEFAULT_CONFIDENCE: f64 = 0.0;

/// Positional requirement identifier, 1-based
pub fn requirement_id(position: usize) -> String {
    format!("REQ-{:04}", position)
}

/// Zip chunks with their summaries into schema-complete requirements
///
/// Evidence is taken from the chunk, not the summary, so every requirement
/// traces back to the pages and kinds that produced it. Extra chunks or
/// summaries beyond the shorter list are dropped.
pub fn assemble_requirements(chunks: &[Chunk], summaries: &[Summary]) -> Vec<RequirementUnit> {
    if chunks.len() != summaries.len() {
        warn!(
            "Chunk/summary count mismatch ({} chunks, {} summaries); truncating to {}",
            chunks.len(),
            summaries.len(),
            chunks.len().min(summaries.len())
        );
    }

    let requirements: Vec<RequirementUnit> = chunks
        .iter()
        .zip(summaries)
        .enumerate()
        .map(|(idx, (chunk, summary))| {
            let position = idx + 1;
            let title = summary
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Requirement {}", position));

            RequirementUnit {
                id: requirement_id(position),
                title,
                description: summary.description.clone().unwrap_or_default(),
                source_pages: summary.source_pages.clone(),
                evidence: chunk.metadata.clone(),
                confidence: summary
                    .confidence
                    .filter(|c| c.is_finite())
                    .unwrap_or(ASSEMBLY_DEFAULT_CONFIDENCE),
                ..Default::default()
            }
        })
        .collect();

    debug!("Assembled {} requirement units", requirements.len());
    requirements
}
