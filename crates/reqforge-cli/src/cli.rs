//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reqforge - Turn specification documents into requirement catalogs.
#[derive(Debug, Parser)]
#[command(name = "reqforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REQFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run extraction, chunking, summarization, annotation and output
    Run(RunArgs),

    /// Re-render the compatibility CSV from an existing catalog
    Table(TableArgs),

    /// Merge and chunk artifacts without summarizing
    Chunk(ChunkArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Source PDF (overrides inputs.pdf_path)
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    /// Pre-extracted artifact bundle (overrides inputs.artifacts_path)
    #[arg(long)]
    pub artifacts: Option<PathBuf>,
}

/// Arguments for the table command.
#[derive(Debug, Parser)]
pub struct TableArgs {
    /// Catalog YAML written by a previous run
    #[arg(long)]
    pub catalog: PathBuf,

    /// Requirement carrying the compatibility matrix
    #[arg(short, long)]
    pub target: Option<usize>,

    /// CSV destination (defaults to commands.compatibility_csv_path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the chunk command.
#[derive(Debug, Parser)]
pub struct ChunkArgs {
    /// Artifact bundle to merge and chunk
    #[arg(long)]
    pub artifacts: PathBuf,

    /// Window size in characters
    #[arg(long)]
    pub max_characters: Option<usize>,

    /// Characters carried into the next window
    #[arg(long)]
    pub overlap_characters: Option<usize>,
}
