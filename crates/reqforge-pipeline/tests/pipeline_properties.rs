//! Property tests for merge ordering, chunk budgets and schema completeness

use proptest::prelude::*;
use reqforge_domain::{ArtifactSet, MergedUnit, Summary, TextArtifact};
use reqforge_pipeline::{assemble_requirements, merge_artifacts, TextWindowChunker};

fn kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("text".to_string()),
        Just("table".to_string()),
        Just("figure".to_string()),
    ]
}

fn unit_strategy() -> impl Strategy<Value = MergedUnit> {
    (0u32..6, kind_strategy(), "[a-z ]{0,120}")
        .prop_map(|(page, kind, content)| MergedUnit::new(page, kind, content))
}

proptest! {
    /// Property: merge output is sorted by (page, kind) and stable among ties
    #[test]
    fn test_merge_order_is_sorted_and_stable(
        entries in prop::collection::vec((0u32..5, prop_oneof![Just("text"), Just("ocr")]), 0..40)
    ) {
        let artifacts = ArtifactSet {
            text: entries
                .iter()
                .enumerate()
                .map(|(idx, (page, source))| {
                    let mut text = TextArtifact::new(*page, format!("{idx}"));
                    text.source = source.to_string();
                    text
                })
                .collect(),
            ..Default::default()
        };
        let merged = merge_artifacts(&artifacts);
        prop_assert_eq!(merged.len(), entries.len());

        for pair in merged.windows(2) {
            let a = (&pair[0].page, &pair[0].kind);
            let b = (&pair[1].page, &pair[1].kind);
            prop_assert!(a <= b);
            if a == b {
                let ia: usize = pair[0].content.parse().unwrap();
                let ib: usize = pair[1].content.parse().unwrap();
                prop_assert!(ia < ib, "tie order not preserved");
            }
        }
    }

    /// Property: only a window holding an oversized unit exceeds budget + overlap
    #[test]
    fn test_chunks_respect_budget(
        units in prop::collection::vec(unit_strategy(), 0..30),
        max in 50usize..300,
        overlap_ratio in 0usize..50,
    ) {
        let overlap = max * overlap_ratio / 100;
        let chunks = TextWindowChunker::new(max, overlap).chunk(&units);
        let longest_unit = units.iter().map(MergedUnit::char_len).max().unwrap_or(0);

        for chunk in &chunks {
            let len = chunk.text.chars().count();
            prop_assert!(len <= (max + overlap).max(longest_unit + overlap + 1));
        }
    }

    /// Property: no unit content is ever cut; each appears whole in some chunk
    #[test]
    fn test_units_never_truncated(
        units in prop::collection::vec(unit_strategy(), 1..20),
        max in 20usize..200,
    ) {
        let chunks = TextWindowChunker::new(max, max / 4).chunk(&units);
        for unit in &units {
            let needle = unit.content.trim();
            prop_assert!(chunks.iter().any(|c| c.text.contains(needle)));
        }
    }

    /// Property: every requirement has all schema fields with typed values
    #[test]
    fn test_schema_completeness(
        titles in prop::collection::vec(prop::option::of("[A-Za-z ]{0,20}"), 0..10),
        confidences in prop::collection::vec(prop::option::of(-1.0f64..2.0), 0..10),
    ) {
        let count = titles.len().min(confidences.len());
        let chunks: Vec<_> = (0..count)
            .map(|i| reqforge_domain::Chunk {
                text: format!("chunk {i}"),
                metadata: reqforge_domain::ChunkMetadata::opened(i as u32, "text"),
            })
            .collect();
        let summaries: Vec<Summary> = titles
            .iter()
            .zip(&confidences)
            .map(|(title, confidence)| Summary {
                title: title.clone(),
                confidence: *confidence,
                ..Default::default()
            })
            .collect();

        for req in assemble_requirements(&chunks, &summaries) {
            let value = serde_json::to_value(&req).unwrap();
            let obj = value.as_object().unwrap();
            prop_assert_eq!(obj.len(), 12);
            prop_assert!(obj.values().all(|v| !v.is_null()));
            prop_assert!(obj["id"].is_string());
            prop_assert!(obj["title"].is_string());
            prop_assert!(!req.title.is_empty());
            prop_assert!(obj["source_pages"].is_array());
            prop_assert!(obj["evidence"].is_object());
            prop_assert!(obj["confidence"].is_number());
            prop_assert!(obj["compatibility_matrix"].is_object());
        }
    }
}

/// Overlap continuity: a reopened window starts with the previous raw tail
#[test]
fn test_overlap_continuity() {
    let units: Vec<MergedUnit> = (0..10)
        .map(|i| MergedUnit::new(1, "text", format!("{}{}", i, "z".repeat(37))))
        .collect();
    let overlap = 15;
    let chunks = TextWindowChunker::new(100, overlap).chunk(&units);
    assert!(chunks.len() > 1);

    for pair in chunks.windows(2) {
        // Sealed chunks are trimmed but end in unit content, so their tail is
        // the raw tail.
        let prev: Vec<char> = pair[0].text.chars().collect();
        let expected: String = prev[prev.len() - overlap..].iter().collect();
        let next: String = pair[1].text.chars().take(overlap).collect();
        assert_eq!(next, expected);
    }
}
