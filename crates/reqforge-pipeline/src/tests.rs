//! Integration tests for the pipeline stages

#[cfg(test)]
mod tests {
    use crate::{assemble_requirements, merge_artifacts, ChunkingConfig, TextWindowChunker};
    use reqforge_domain::{
        ArtifactSet, FigureArtifact, MergedUnit, Summary, TableArtifact, TextArtifact,
    };
    use serde_json::json;

    #[test]
    fn test_full_merge_chunk_assemble_flow() {
        let artifacts = ArtifactSet {
            text: vec![
                TextArtifact::new(1, "Power-up: CMD_RESET then CMD_INIT."),
                TextArtifact::new(2, "After initialization the host issues CMD_MRW."),
            ],
            table: vec![TableArtifact::new(
                1,
                vec![vec![json!("Parameter"), json!("Value")], vec![json!("tINIT"), json!(200)]],
            )],
            figure: vec![FigureArtifact::new(2, Some("Figure 1: Init flow".to_string()))],
        };

        let units = merge_artifacts(&artifacts);
        assert_eq!(units.len(), 4);

        let chunker = TextWindowChunker::from_config(&ChunkingConfig {
            max_characters: 80,
            overlap_characters: 10,
        });
        let chunks = chunker.chunk(&units);
        assert!(chunks.len() >= 2, "expected the budget to force a split");

        let summaries: Vec<Summary> = chunks
            .iter()
            .map(|c| Summary {
                title: Some(format!("page {}", c.metadata.start_page)),
                confidence: Some(0.6),
                ..Default::default()
            })
            .collect();
        let requirements = assemble_requirements(&chunks, &summaries);

        assert_eq!(requirements.len(), chunks.len());
        for (idx, (req, chunk)) in requirements.iter().zip(&chunks).enumerate() {
            assert_eq!(req.id, format!("REQ-{:04}", idx + 1));
            assert_eq!(req.evidence, chunk.metadata);
        }
        assert_eq!(requirements[0].evidence.start_page, 1);
    }

    #[test]
    fn test_end_to_end_overflow_scenario() {
        let units = vec![
            MergedUnit::new(1, "text", "A".repeat(1500)),
            MergedUnit::new(1, "text", "B".repeat(1000)),
        ];
        let chunks = TextWindowChunker::from_config(&ChunkingConfig::default()).chunk(&units);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "A".repeat(1500));
        assert!(chunks[1].text.starts_with(&"A".repeat(200)));
        assert!(chunks[1].text.ends_with(&"B".repeat(1000)));
        assert_eq!(chunks[1].text.chars().count(), 200 + 1 + 1000);
    }

    #[test]
    fn test_identical_runs_produce_identical_ids() {
        let artifacts = ArtifactSet {
            text: (1..=5)
                .map(|p| TextArtifact::new(p, "x".repeat(60)))
                .collect(),
            ..Default::default()
        };
        let run = || {
            let chunks = TextWindowChunker::new(100, 20).chunk(&merge_artifacts(&artifacts));
            let summaries = vec![Summary::default(); chunks.len()];
            assemble_requirements(&chunks, &summaries)
        };
        assert_eq!(run(), run());
    }
}
