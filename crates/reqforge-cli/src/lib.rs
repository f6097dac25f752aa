//! Reqforge CLI library.
//!
//! Configuration loading, the staged pipeline run, and command execution
//! for the `reqforge` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use cli::{Cli, Command};
pub use config::PipelineConfig;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use pipeline::{run_pipeline, run_pipeline_with, RunReport};
