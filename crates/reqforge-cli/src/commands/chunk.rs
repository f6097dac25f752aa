//! Chunk command implementation.

use crate::cli::ChunkArgs;
use crate::config::PipelineConfig;
use crate::error::Result;
use reqforge_domain::{Chunk, MergedUnit};
use reqforge_extract::load_artifact_bundle;
use reqforge_pipeline::{merge_artifacts, ChunkingConfig, TextWindowChunker};
use serde::Serialize;
use std::path::Path;

/// Merged units and the windows cut from them.
#[derive(Debug, Serialize)]
pub struct ChunkPreview {
    /// Budget the windows were cut with
    pub chunking: ChunkingConfig,
    /// Units in merged order
    pub merged_units: Vec<MergedUnit>,
    /// Summarization windows
    pub chunks: Vec<Chunk>,
}

/// Merge and chunk a bundle without summarizing.
pub fn preview_chunks(bundle: &Path, chunking: ChunkingConfig) -> Result<ChunkPreview> {
    chunking.validate()?;
    let artifacts = load_artifact_bundle(bundle)?;
    let merged_units = merge_artifacts(&artifacts);
    let chunks = TextWindowChunker::from_config(&chunking).chunk(&merged_units);
    Ok(ChunkPreview {
        chunking,
        merged_units,
        chunks,
    })
}

/// Execute the chunk command.
pub fn execute_chunk(args: ChunkArgs, config: &PipelineConfig) -> Result<()> {
    let mut chunking = config.chunking;
    if let Some(max) = args.max_characters {
        chunking.max_characters = max;
    }
    if let Some(overlap) = args.overlap_characters {
        chunking.overlap_characters = overlap;
    }

    let preview = preview_chunks(&args.artifacts, chunking)?;
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
