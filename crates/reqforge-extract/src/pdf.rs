//! PDF text extraction using the `pdf-extract` crate.
//!
//! `pdf-extract` returns the whole document as one string with form feeds
//! between pages. Each page is split into paragraphs on blank lines and
//! every paragraph becomes one text artifact.

use crate::error::{ExtractError, Result};
use reqforge_domain::TextArtifact;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Paragraphs shorter than this (in characters) are dropped
pub const DEFAULT_MIN_PARAGRAPH_LENGTH: usize = 20;

/// Extract paragraph artifacts from the PDF at `path`
pub fn extract_pdf_text(path: &Path, min_paragraph_length: usize) -> Result<Vec<TextArtifact>> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let artifacts = paragraphs_from_text(&text, min_paragraph_length);
    if artifacts.is_empty() {
        warn!(path = %path.display(), "PDF has no extractable text layer");
    }
    debug!(path = %path.display(), paragraphs = artifacts.len(), "Extracted PDF text");
    Ok(artifacts)
}

/// Split extracted document text into per-page paragraph artifacts
///
/// Pages are delimited by form feeds and numbered from 1. `block_index` is
/// the paragraph's position among the non-empty paragraphs of its page,
/// counted before the length filter.
pub fn paragraphs_from_text(text: &str, min_paragraph_length: usize) -> Vec<TextArtifact> {
    let mut artifacts = Vec::new();

    for (page_idx, page) in text.split('\x0C').enumerate() {
        let page_no = u32::try_from(page_idx + 1).unwrap_or(u32::MAX);

        let paragraphs = page
            .split("\n\n")
            .map(normalize_whitespace)
            .filter(|p| !p.is_empty());

        for (block_index, paragraph) in paragraphs.enumerate() {
            if paragraph.chars().count() < min_paragraph_length {
                continue;
            }
            let mut artifact = TextArtifact::new(page_no, paragraph);
            artifact.block_index = Some(block_index);
            artifacts.push(artifact);
        }
    }

    artifacts
}

// PDF text often breaks lines mid-sentence.
fn normalize_whitespace(paragraph: &str) -> String {
    paragraph.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_and_paragraphs() {
        let text = "Power-up sequence\nstarts with RESET asserted.\n\nshort\n\n\
                    CMD_INIT is issued after tINIT.\x0C\x0CPage three paragraph is long enough.";
        let artifacts = paragraphs_from_text(text, 20);

        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts[0].page, 1);
        assert_eq!(artifacts[0].content, "Power-up sequence starts with RESET asserted.");
        assert_eq!(artifacts[0].block_index, Some(0));
        assert_eq!(artifacts[1].content, "CMD_INIT is issued after tINIT.");
        assert_eq!(artifacts[1].block_index, Some(2));
        assert_eq!(artifacts[2].page, 3);
        assert_eq!(artifacts[2].source, "text");
    }

    #[test]
    fn test_min_length_counts_characters() {
        let artifacts = paragraphs_from_text("가나다라마", 5);
        assert_eq!(artifacts.len(), 1);
        assert!(paragraphs_from_text("가나다라", 5).is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = extract_pdf_text(Path::new("/definitely/not/here.pdf"), 20);
        assert!(matches!(result, Err(ExtractError::NotFound(_))));
    }

    #[test]
    fn test_non_pdf_bytes_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        fs::write(&path, b"This is not a PDF").unwrap();

        let result = extract_pdf_text(&path, 20);
        assert!(matches!(result, Err(ExtractError::Pdf { .. })));
    }
}
