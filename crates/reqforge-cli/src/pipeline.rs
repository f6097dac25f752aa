//! The five-stage pipeline behind `reqforge run`.

use crate::config::PipelineConfig;
use crate::error::Result;
use reqforge_catalog::{
    build_catalog, build_review, generated_at, structured_chunks, write_catalog, write_review,
    RunContext, StageLogger,
};
use reqforge_commands::{
    annotate_requirements, attach_compatibility, build_sequential_compatibility_table,
    extract_command_names, extract_compatibility_mapping, infer_compatibility,
    write_compatibility_csv, CommandMatcher, SequenceKeywords,
};
use reqforge_domain::traits::Summarizer;
use reqforge_extract::collect_artifacts;
use reqforge_llm::build_summarizer;
use reqforge_pipeline::{assemble_requirements, merge_artifacts, TextWindowChunker};
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts and output locations of one completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Run identifier
    pub run_id: String,
    /// Units after merging
    pub merged_units: usize,
    /// Summarization windows
    pub chunks: usize,
    /// Requirements in the catalog
    pub requirements: usize,
    /// Requirements that received commands from their own chunk
    pub annotated: usize,
    /// Ordered command pairs with inferred evidence
    pub compatibility_pairs: usize,
    /// Catalog YAML
    pub catalog_path: PathBuf,
    /// Review YAML
    pub review_path: PathBuf,
    /// Sequencing table CSV
    pub compatibility_csv_path: PathBuf,
}

/// Run every stage with the summarizer selected by `[llm]`.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunReport> {
    let summarizer = build_summarizer(&config.llm);
    run_pipeline_with(config, summarizer.as_ref())
}

/// Run every stage with an explicit summarizer.
pub fn run_pipeline_with(config: &PipelineConfig, summarizer: &dyn Summarizer) -> Result<RunReport> {
    let context = RunContext::create(Path::new(&config.inputs.processed_dir))?;
    let log_dir = PathBuf::from(&config.logging.base_dir);
    let redact = &config.logging.redact_fields;
    let stage = |name: &str| StageLogger::begin(&log_dir, name, redact);
    let snapshot = |logger: &StageLogger, name: &str, payload: serde_json::Value| -> Result<()> {
        logger.log_json(name, &payload)?;
        context.cache_json(name, &payload)?;
        Ok(())
    };

    let sources = config.artifact_sources();
    let source_pdf = sources
        .pdf
        .as_ref()
        .or(sources.bundle.as_ref())
        .map(|p| display_path(p))
        .unwrap_or_default();

    let logger = stage("01_extraction");
    let artifacts = collect_artifacts(&sources)?;
    snapshot(&logger, "text_segments", json!({ "items": artifacts.text }))?;
    snapshot(&logger, "table_segments", json!({ "items": artifacts.table }))?;
    snapshot(&logger, "figure_segments", json!({ "items": artifacts.figure }))?;
    logger.finish();

    let logger = stage("02_chunking");
    let merged = merge_artifacts(&artifacts);
    let chunks = TextWindowChunker::from_config(&config.chunking).chunk(&merged);
    snapshot(&logger, "merged_chunks", json!({ "items": merged }))?;
    snapshot(&logger, "chunked_texts", json!({ "items": chunks }))?;
    logger.finish();

    let logger = stage("03_llm_summarization");
    let summaries = summarizer.summarize(&chunks);
    snapshot(&logger, "summaries", json!({ "items": summaries }))?;
    logger.finish();

    let logger = stage("04_requirements");
    let commands = &config.commands;
    let mut requirements = assemble_requirements(&chunks, &summaries);
    let matcher = CommandMatcher::new(commands.patterns.as_slice())?;
    let annotated = annotate_requirements(
        &mut requirements,
        &chunks,
        &matcher,
        commands.max_per_requirement,
    );
    let whitelist: HashSet<String> = requirements
        .iter()
        .flat_map(|r| r.command_names())
        .collect();
    let matrix = infer_compatibility(
        &chunks,
        &matcher,
        Some(&whitelist).filter(|w| !w.is_empty()),
        &SequenceKeywords::from_config(commands),
    );
    let compatibility_pairs = matrix.pair_count();
    attach_compatibility(&mut requirements, matrix, commands);
    snapshot(&logger, "requirements", json!({ "items": requirements }))?;
    logger.finish();

    let logger = stage("05_outputs");
    let generated_at = generated_at()?;
    let catalog = build_catalog(
        requirements,
        structured_chunks(&merged, &source_pdf),
        &config.catalog.schema_version,
    );
    let catalog_path = write_catalog(&catalog, Path::new(&config.catalog.output_path))?;
    snapshot(&logger, "catalog_payload", serde_json::to_value(&catalog)?)?;

    let review = build_review(
        &catalog.requirement_units,
        &catalog.structured_chunks,
        &config.review_options(),
        &context.run_id,
        &source_pdf,
        &generated_at,
    );
    let review_path = write_review(&review, Path::new(&config.review.output_path))?;

    let target = commands.target_requirement_index;
    let names = extract_command_names(&catalog.requirement_units, target);
    let (mapping, default) = extract_compatibility_mapping(&catalog.requirement_units, target);
    let table = build_sequential_compatibility_table(&names, &mapping, default.as_deref());
    let csv_path = write_compatibility_csv(&table, Path::new(&commands.compatibility_csv_path))?;

    logger.log_json(
        "artifacts",
        &json!({
            "catalog_path": catalog_path,
            "review_path": review_path,
            "review_schema_version": config.review.schema_version,
            "review_generated_at": generated_at,
            "compatibility_csv_path": csv_path,
        }),
    )?;
    snapshot(&logger, "review_payload", serde_json::to_value(&review)?)?;
    snapshot(
        &logger,
        "compatibility_matrix",
        json!({ "commands": names, "mapping": mapping, "default": default }),
    )?;
    logger.finish();

    let report = RunReport {
        run_id: context.run_id.clone(),
        merged_units: merged.len(),
        chunks: chunks.len(),
        requirements: catalog.metadata.total_units,
        annotated,
        compatibility_pairs,
        catalog_path,
        review_path,
        compatibility_csv_path: csv_path,
    };
    debug!(?report, "Run report");
    info!(run_id = %report.run_id, requirements = report.requirements, "Pipeline finished");
    Ok(report)
}

/// Absolute form of `path` when it resolves, else the path as given.
fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
