//! Reqforge Catalog & Run Outputs
//!
//! Everything a pipeline run leaves on disk:
//!
//! - the coverage catalog (requirement units plus structured chunks), YAML
//! - the human review document, YAML
//! - per-run JSON caches under `<processed_dir>/<run_id>/`
//! - per-stage JSON snapshots under `<log_dir>/<stage>/`, with configured
//!   fields redacted
//!
//! # Example
//!
//! ```
//! use reqforge_catalog::{build_catalog, structured_chunks};
//! use reqforge_domain::{MergedUnit, RequirementUnit};
//!
//! let units = vec![MergedUnit::new(1, "text", "tRP applies")];
//! let chunks = structured_chunks(&units, "spec.pdf");
//! let catalog = build_catalog(vec![RequirementUnit::default()], chunks, "0.1.0");
//! assert_eq!(catalog.metadata.total_units, 1);
//! assert_eq!(catalog.structured_chunks[0].id.as_deref(), Some("text-0001"));
//! ```

#![warn(missing_docs)]

mod catalog;
mod error;
mod review;
mod run;
mod stage;
mod structured;

pub use catalog::{build_catalog, read_catalog, write_catalog, Catalog, CatalogMetadata};
pub use error::{CatalogError, Result};
pub use review::{
    build_review, write_review, ChunkOverview, ChunksOverview, ReviewDocument, ReviewEntry,
    ReviewMetadata, ReviewOptions, ReviewSummary,
};
pub use run::{generated_at, RunContext};
pub use stage::{redact_value, sanitize_name, StageLogger, REDACTED};
pub use structured::structured_chunks;
