//! Canonical structured chunks derived from merged units

use reqforge_domain::{BBox, ChunkSource, MergedUnit, StructuredChunk};
use serde_json::{json, Map, Value};

/// One structured chunk per merged unit, in merged order
///
/// Ids are `"{kind}-{n:04}"` where `n` is the 1-based position in the merged
/// sequence.
pub fn structured_chunks(units: &[MergedUnit], pdf: &str) -> Vec<StructuredChunk> {
    units
        .iter()
        .enumerate()
        .map(|(idx, unit)| StructuredChunk {
            kind: unit.kind.clone(),
            id: Some(format!("{}-{:04}", unit.kind, idx + 1)),
            source: ChunkSource {
                pdf: pdf.to_string(),
                page: unit.page,
                bbox: bbox_of(&unit.metadata),
            },
            payload: payload_of(unit),
        })
        .collect()
}

fn bbox_of(metadata: &Map<String, Value>) -> Option<BBox> {
    let coords = metadata.get("bbox")?.as_array()?;
    if coords.len() != 4 {
        return None;
    }
    let mut bbox = [0.0; 4];
    for (slot, value) in bbox.iter_mut().zip(coords) {
        *slot = value.as_f64()?;
    }
    Some(bbox)
}

fn payload_of(unit: &MergedUnit) -> Value {
    match unit.kind.as_str() {
        "table" => json!({
            "rows": unit.metadata.get("content").cloned().unwrap_or_else(|| json!([])),
            "text": unit.content,
        }),
        "figure" => json!({
            "caption": unit.metadata.get("caption").cloned().unwrap_or(Value::Null),
            "meta": unit.metadata.get("meta").cloned().unwrap_or_else(|| json!({})),
        }),
        _ => json!({ "text": unit.content }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(page: u32, kind: &str, content: &str, metadata: Value) -> MergedUnit {
        let mut unit = MergedUnit::new(page, kind, content);
        if let Value::Object(map) = metadata {
            unit.metadata = map;
        }
        unit
    }

    #[test]
    fn test_payload_per_kind() {
        let units = vec![
            unit(1, "figure", "Fig 2", json!({"caption": "Fig 2", "meta": {"width": 10}})),
            unit(
                1,
                "table",
                "a | b",
                json!({"content": [["a", "b"]], "bbox": [1.0, 2.0, 3.0, 4.0]}),
            ),
            unit(1, "text", "para", json!({"bbox": [1, 2]})),
        ];
        let chunks = structured_chunks(&units, "doc.pdf");

        assert_eq!(chunks[0].id.as_deref(), Some("figure-0001"));
        assert_eq!(chunks[0].payload, json!({"caption": "Fig 2", "meta": {"width": 10}}));

        assert_eq!(chunks[1].kind, "table");
        assert_eq!(chunks[1].payload, json!({"rows": [["a", "b"]], "text": "a | b"}));
        assert_eq!(chunks[1].source.bbox, Some([1.0, 2.0, 3.0, 4.0]));

        assert_eq!(chunks[2].id.as_deref(), Some("text-0003"));
        assert_eq!(chunks[2].payload, json!({"text": "para"}));
        assert_eq!(chunks[2].source.bbox, None);
        assert_eq!(chunks[2].source.pdf, "doc.pdf");
    }

    #[test]
    fn test_structured_chunk_serializes_type_key() {
        let chunks = structured_chunks(&[MergedUnit::new(5, "text", "x")], "d.pdf");
        let value = serde_json::to_value(&chunks[0]).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["source"]["page"], 5);
        assert!(value["source"].get("bbox").is_none());
    }
}
