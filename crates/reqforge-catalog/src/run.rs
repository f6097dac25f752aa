//! Per-run identity and cached intermediate results

use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Identity and scratch directory of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// `run_<uuid v7>`; time-ordered, unique per run
    pub run_id: String,
    /// `<processed_dir>/<run_id>`
    pub processed_dir: PathBuf,
}

impl RunContext {
    /// Allocate a run id and create its processed directory under `base`
    pub fn create(base: &Path) -> Result<Self> {
        let run_id = format!("run_{}", uuid::Uuid::now_v7());
        let processed_dir = base.join(&run_id);
        fs::create_dir_all(&processed_dir).map_err(CatalogError::io(&processed_dir))?;
        info!(run_id = %run_id, dir = %processed_dir.display(), "Created run context");
        Ok(Self {
            run_id,
            processed_dir,
        })
    }

    /// Write `payload` as pretty JSON to `<processed_dir>/<name>.json`
    pub fn cache_json<T: Serialize>(&self, name: &str, payload: &T) -> Result<PathBuf> {
        let path = self.processed_dir.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(payload)?;
        fs::write(&path, json).map_err(CatalogError::io(&path))?;
        debug!(path = %path.display(), "Cached intermediate result");
        Ok(path)
    }
}

/// Current UTC time as RFC 3339 with whole seconds
pub fn generated_at() -> Result<String> {
    let now = OffsetDateTime::now_utc();
    let now = now.replace_nanosecond(0).unwrap_or(now);
    Ok(now.format(&Rfc3339)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ids_are_unique_and_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        let a = RunContext::create(dir.path()).unwrap();
        let b = RunContext::create(dir.path()).unwrap();

        assert!(a.run_id.starts_with("run_"));
        assert_ne!(a.run_id, b.run_id);
        assert!(a.processed_dir.is_dir());
        assert_eq!(a.processed_dir, dir.path().join(&a.run_id));
    }

    #[test]
    fn test_cache_json() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RunContext::create(dir.path()).unwrap();
        let path = ctx
            .cache_json("summaries", &serde_json::json!({"items": [1, 2]}))
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "summaries.json");
        let back: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back["items"][1], 2);
    }

    #[test]
    fn test_generated_at_is_rfc3339_utc() {
        let stamp = generated_at().unwrap();
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2026-01-01T00:00:00Z".len());
        assert_eq!(&stamp[10..11], "T");
    }
}
