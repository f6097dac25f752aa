//! Catalog read-back and the upper-triangular sequencing table

use crate::error::Result;
use reqforge_domain::{CommandRef, CompatibilityMatrix, RequirementUnit};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Cell value when neither the mapping nor the caller supplies one
const FALLBACK_STATE: &str = "UNKNOWN";

/// Commands of the requirement at `target_index` in a catalog's units
///
/// Empty when there are no units or the index is out of range.
pub fn extract_commands_from_catalog(
    units: &[RequirementUnit],
    target_index: usize,
) -> Vec<CommandRef> {
    units
        .get(target_index)
        .map(|unit| unit.commands.clone())
        .unwrap_or_default()
}

/// Names of [`extract_commands_from_catalog`], in catalog order
pub fn extract_command_names(units: &[RequirementUnit], target_index: usize) -> Vec<String> {
    units
        .get(target_index)
        .map(RequirementUnit::command_names)
        .unwrap_or_default()
}

/// Attached matrix and default state of the target requirement
///
/// An empty default reads as absent.
pub fn extract_compatibility_mapping(
    units: &[RequirementUnit],
    target_index: usize,
) -> (CompatibilityMatrix, Option<String>) {
    match units.get(target_index) {
        Some(unit) => {
            let attachment = &unit.compatibility_matrix;
            let default = Some(attachment.default.clone()).filter(|d| !d.is_empty());
            (attachment.matrix.clone(), default)
        }
        None => (CompatibilityMatrix::new(), None),
    }
}

/// Render the sequencing table: rows are predecessors, columns successors
///
/// The first row is the header `["", names...]`. Cells on or below the
/// diagonal are `"-"`; others take the mapping state, else `default`, else
/// `"UNKNOWN"`.
pub fn build_sequential_compatibility_table(
    names: &[String],
    mapping: &CompatibilityMatrix,
    default: Option<&str>,
) -> Vec<Vec<String>> {
    let fallback = default.unwrap_or(FALLBACK_STATE);
    let mut table = Vec::with_capacity(names.len() + 1);

    let mut header = vec![String::new()];
    header.extend(names.iter().cloned());
    table.push(header);

    for (i, row_cmd) in names.iter().enumerate() {
        let mut row = Vec::with_capacity(names.len() + 1);
        row.push(row_cmd.clone());
        for (j, col_cmd) in names.iter().enumerate() {
            let cell = if j <= i {
                "-".to_string()
            } else {
                mapping
                    .get(row_cmd, col_cmd)
                    .map(|state| state.as_str().to_string())
                    .unwrap_or_else(|| fallback.to_string())
            };
            row.push(cell);
        }
        table.push(row);
    }
    table
}

/// Encode a table as CSV with `\n` line endings
pub fn render_compatibility_csv(table: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);
    for row in table {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the table as CSV at `path`, creating parent directories
pub fn write_compatibility_csv(table: &[Vec<String>], path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_compatibility_csv(table)?)?;
    info!(path = %path.display(), rows = table.len(), "Wrote compatibility table");
    Ok(path.to_path_buf())
}
