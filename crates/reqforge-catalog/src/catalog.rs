//! The coverage catalog document

use crate::error::{CatalogError, Result};
use reqforge_domain::{RequirementUnit, StructuredChunk};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Counts recorded in the catalog footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Number of requirement units
    pub total_units: usize,
    /// Number of structured chunks
    pub total_chunks: usize,
}

/// Requirement units and the structured chunks they were derived from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog schema version
    #[serde(default)]
    pub schema_version: String,

    /// Finished requirements
    #[serde(default)]
    pub requirement_units: Vec<RequirementUnit>,

    /// Canonical chunk records
    #[serde(default)]
    pub structured_chunks: Vec<StructuredChunk>,

    /// Counts
    #[serde(default)]
    pub metadata: CatalogMetadata,
}

/// Assemble a catalog; the metadata counts follow the inputs
pub fn build_catalog(
    requirement_units: Vec<RequirementUnit>,
    structured_chunks: Vec<StructuredChunk>,
    schema_version: &str,
) -> Catalog {
    let metadata = CatalogMetadata {
        total_units: requirement_units.len(),
        total_chunks: structured_chunks.len(),
    };
    Catalog {
        schema_version: schema_version.to_string(),
        requirement_units,
        structured_chunks,
        metadata,
    }
}

/// Write `catalog` as YAML at `path`, creating parent directories
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<PathBuf> {
    write_yaml(catalog, path)?;
    info!(
        path = %path.display(),
        units = catalog.metadata.total_units,
        "Wrote catalog"
    );
    Ok(path.to_path_buf())
}

/// Load a catalog previously written by [`write_catalog`]
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path).map_err(CatalogError::io(path))?;
    Ok(serde_yaml::from_str(&raw)?)
}

pub(crate) fn write_yaml<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(CatalogError::io(parent))?;
    }
    let yaml = serde_yaml::to_string(value)?;
    fs::write(path, yaml).map_err(CatalogError::io(path))
}
