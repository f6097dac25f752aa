//! Pipeline configuration loaded from a single TOML document.

use crate::error::{CliError, Result};
use reqforge_catalog::ReviewOptions;
use reqforge_commands::{CommandConfig, CommandMatcher};
use reqforge_extract::{ArtifactSources, DEFAULT_MIN_PARAGRAPH_LENGTH};
use reqforge_llm::LlmConfig;
use reqforge_pipeline::ChunkingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Full pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Input and scratch locations
    pub inputs: InputsConfig,

    /// PDF text extraction
    pub extraction: ExtractionConfig,

    /// Chunk windows
    pub chunking: ChunkingConfig,

    /// Summarization
    pub llm: LlmConfig,

    /// Command annotation and compatibility
    pub commands: CommandConfig,

    /// Catalog document
    pub catalog: CatalogConfig,

    /// Review document
    pub review: ReviewConfig,

    /// Logging and stage snapshots
    pub logging: LoggingConfig,
}

/// `[inputs]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    /// Source PDF
    pub pdf_path: String,

    /// Optional pre-extracted artifact bundle; empty means none
    pub artifacts_path: String,

    /// Base directory for per-run cached results
    pub processed_dir: String,
}

/// `[extraction]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Paragraphs shorter than this many characters are dropped
    pub min_paragraph_length: usize,
}

/// `[catalog]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog schema version
    pub schema_version: String,

    /// Where the catalog YAML is written
    pub output_path: String,
}

/// `[review]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Review schema version
    pub schema_version: String,

    /// Where the review YAML is written
    pub output_path: String,

    /// Include source pages per requirement
    pub include_traceability: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,

    /// Root directory for stage snapshots and `pipeline.log`
    pub base_dir: String,

    /// Keys replaced in snapshots
    pub redact_fields: Vec<String>,
}

impl PipelineConfig {
    /// Load and validate configuration.
    ///
    /// Without a path the built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        };
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject budgets and patterns the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.chunking.validate()?;
        CommandMatcher::new(self.commands.patterns.as_slice())?;
        if self.catalog.output_path.trim().is_empty() {
            return Err(CliError::Config("catalog.output_path is empty".to_string()));
        }
        if self.review.output_path.trim().is_empty() {
            return Err(CliError::Config("review.output_path is empty".to_string()));
        }
        Ok(())
    }

    /// Replace the configured inputs with command-line values.
    pub fn apply_input_overrides(&mut self, pdf: Option<PathBuf>, artifacts: Option<PathBuf>) {
        if let Some(pdf) = pdf {
            self.inputs.pdf_path = pdf.to_string_lossy().into_owned();
        }
        if let Some(artifacts) = artifacts {
            self.inputs.artifacts_path = artifacts.to_string_lossy().into_owned();
        }
    }

    /// Artifact sources described by `[inputs]` and `[extraction]`.
    ///
    /// With a bundle configured, the PDF is only read if it exists; the
    /// bundle may carry its own text.
    pub fn artifact_sources(&self) -> ArtifactSources {
        let bundle = non_empty_path(&self.inputs.artifacts_path);
        let pdf = non_empty_path(&self.inputs.pdf_path)
            .filter(|pdf| bundle.is_none() || pdf.exists());
        ArtifactSources {
            pdf,
            bundle,
            min_paragraph_length: self.extraction.min_paragraph_length,
        }
    }

    /// Review document options.
    pub fn review_options(&self) -> ReviewOptions {
        ReviewOptions {
            schema_version: self.review.schema_version.clone(),
            include_traceability: self.review.include_traceability,
        }
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            pdf_path: "data/raw/spec.pdf".to_string(),
            artifacts_path: String::new(),
            processed_dir: "data/processed".to_string(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_paragraph_length: DEFAULT_MIN_PARAGRAPH_LENGTH,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            schema_version: "0.1.0".to_string(),
            output_path: "artifacts/catalog.yaml".to_string(),
        }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        let options = ReviewOptions::default();
        Self {
            schema_version: options.schema_version,
            output_path: "artifacts/review.yaml".to_string(),
            include_traceability: options.include_traceability,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            base_dir: "logs".to_string(),
            redact_fields: Vec::new(),
        }
    }
}
