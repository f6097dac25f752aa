//! Pre-extracted artifact bundles and source combination

use crate::error::{ExtractError, Result};
use crate::pdf::{extract_pdf_text, DEFAULT_MIN_PARAGRAPH_LENGTH};
use reqforge_domain::ArtifactSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read a JSON bundle `{ text, table, figure }`; missing lists read as empty
pub fn load_artifact_bundle(path: &Path) -> Result<ArtifactSet> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifacts: ArtifactSet =
        serde_json::from_str(&raw).map_err(|source| ExtractError::Bundle {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        text = artifacts.text.len(),
        table = artifacts.table.len(),
        figure = artifacts.figure.len(),
        "Loaded artifact bundle"
    );
    Ok(artifacts)
}

/// Where a run's artifacts come from
#[derive(Debug, Clone)]
pub struct ArtifactSources {
    /// Source PDF, read for its text layer
    pub pdf: Option<PathBuf>,
    /// Pre-extracted bundle
    pub bundle: Option<PathBuf>,
    /// Minimum paragraph length for PDF text
    pub min_paragraph_length: usize,
}

impl Default for ArtifactSources {
    fn default() -> Self {
        Self {
            pdf: None,
            bundle: None,
            min_paragraph_length: DEFAULT_MIN_PARAGRAPH_LENGTH,
        }
    }
}

/// Produce the artifact lists for one run
///
/// Tables and figures come only from the bundle. Text comes from the bundle
/// when it has any, otherwise from the PDF. The PDF is not read when the
/// bundle already supplies text.
pub fn collect_artifacts(sources: &ArtifactSources) -> Result<ArtifactSet> {
    let mut artifacts = match &sources.bundle {
        Some(path) => load_artifact_bundle(path)?,
        None if sources.pdf.is_none() => return Err(ExtractError::NoInput),
        None => ArtifactSet::default(),
    };

    if artifacts.text.is_empty() {
        if let Some(pdf) = &sources.pdf {
            artifacts.text = extract_pdf_text(pdf, sources.min_paragraph_length)?;
        }
    }

    info!(
        text = artifacts.text.len(),
        table = artifacts.table.len(),
        figure = artifacts.figure.len(),
        "Collected artifacts"
    );
    Ok(artifacts)
}
