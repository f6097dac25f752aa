//! Merge text, table and figure artifacts into one ordered stream

use reqforge_domain::{ArtifactSet, MergedUnit, TableArtifact};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Flatten every artifact and order the result by `(page, kind)`
///
/// The sort is stable, so artifacts sharing a page and kind keep their input
/// order (texts before tables before figures, then backend order).
pub fn merge_artifacts(artifacts: &ArtifactSet) -> Vec<MergedUnit> {
    let mut merged = Vec::with_capacity(artifacts.len());

    for item in &artifacts.text {
        merged.push(MergedUnit {
            page: item.page,
            kind: item.source.clone(),
            content: item.content.clone(),
            metadata: provenance(item),
        });
    }
    for item in &artifacts.table {
        merged.push(MergedUnit {
            page: item.page,
            kind: item.source.clone(),
            content: flatten_table(item),
            metadata: provenance(item),
        });
    }
    for item in &artifacts.figure {
        merged.push(MergedUnit {
            page: item.page,
            kind: item.source.clone(),
            content: item.caption.clone().unwrap_or_default(),
            metadata: provenance(item),
        });
    }

    merged.sort_by(|a, b| a.page.cmp(&b.page).then_with(|| a.kind.cmp(&b.kind)));
    debug!("Merged {} artifacts", merged.len());
    merged
}

/// Render a table row-major: cells joined by `" | "`, rows by newline
pub fn flatten_table(table: &TableArtifact) -> String {
    table
        .content
        .iter()
        .map(|row| row.iter().map(render_cell).collect::<Vec<_>>().join(" | "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cell(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The artifact record itself, as a JSON object
fn provenance<T: Serialize>(artifact: &T) -> Map<String, Value> {
    match serde_json::to_value(artifact) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
