//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::run_pipeline;

/// Execute the run command.
pub fn execute_run(args: RunArgs, mut config: PipelineConfig, formatter: &Formatter) -> Result<()> {
    config.apply_input_overrides(args.pdf, args.artifacts);
    let report = run_pipeline(&config)?;
    println!("{}", formatter.format_run_report(&report));
    Ok(())
}
