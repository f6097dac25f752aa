//! Reqforge Extraction Backends
//!
//! Produces the three artifact lists the pipeline consumes. Text comes from
//! the PDF's text layer; tables and figures come from a pre-extracted JSON
//! bundle written by external tools.

#![warn(missing_docs)]

mod bundle;
mod error;
mod pdf;

pub use bundle::{collect_artifacts, load_artifact_bundle, ArtifactSources};
pub use error::{ExtractError, Result};
pub use pdf::{extract_pdf_text, paragraphs_from_text, DEFAULT_MIN_PARAGRAPH_LENGTH};
