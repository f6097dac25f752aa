//! Per-stage JSON snapshots
//!
//! Each pipeline stage gets a [`StageLogger`] that writes named snapshots to
//! `<log_dir>/<stage>/<timestamp>_<name>.json`. Keys listed for redaction are
//! replaced at any depth before anything touches the disk.

use crate::error::{CatalogError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Replacement value for redacted fields
pub const REDACTED: &str = "<redacted>";

/// Keep only ASCII alphanumerics, `-` and `_`; trim surrounding `_`
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}

/// Replace the value of every object key in `fields`, recursing into
/// nested objects and arrays
pub fn redact_value(value: Value, fields: &HashSet<String>) -> Value {
    if fields.is_empty() {
        return value;
    }
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| {
                    let inner = if fields.contains(&key) {
                        Value::String(REDACTED.to_string())
                    } else {
                        redact_value(inner, fields)
                    };
                    (key, inner)
                })
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| redact_value(v, fields)).collect())
        }
        other => other,
    }
}

fn file_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Snapshot writer for one pipeline stage
#[derive(Debug, Clone)]
pub struct StageLogger {
    stage: String,
    dir: PathBuf,
    redact: HashSet<String>,
}

impl StageLogger {
    /// Start `stage` under `log_dir`; logs the stage boundary
    pub fn begin(log_dir: &Path, stage: &str, redact_fields: &[String]) -> Self {
        let stage = sanitize_name(stage);
        info!(stage = %stage, "Stage started");
        Self {
            dir: log_dir.join(&stage),
            stage,
            redact: redact_fields.iter().cloned().collect(),
        }
    }

    /// Sanitized stage name
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Write a redacted JSON snapshot and return its path
    pub fn log_json<T: Serialize>(&self, name: &str, payload: &T) -> Result<PathBuf> {
        let name = sanitize_name(name);
        let path = self.dir.join(format!("{}_{}.json", file_timestamp(), name));

        let value = redact_value(serde_json::to_value(payload)?, &self.redact);
        fs::create_dir_all(&self.dir).map_err(CatalogError::io(&self.dir))?;
        fs::write(&path, serde_json::to_string_pretty(&value)?)
            .map_err(CatalogError::io(&path))?;

        debug!(stage = %self.stage, snapshot = %name, path = %path.display(), "Saved snapshot");
        Ok(path)
    }

    /// Log the stage boundary
    pub fn finish(self) {
        info!(stage = %self.stage, "Stage finished");
    }
}
