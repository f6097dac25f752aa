//! Table command implementation.

use crate::cli::TableArgs;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::output::Formatter;
use reqforge_catalog::read_catalog;
use reqforge_commands::{
    build_sequential_compatibility_table, extract_command_names, extract_compatibility_mapping,
    write_compatibility_csv,
};
use std::path::{Path, PathBuf};

/// Rebuild the sequencing table from a catalog and write it as CSV.
///
/// Returns the table and where it was written.
pub fn render_catalog_table(
    catalog_path: &Path,
    target: usize,
    output: &Path,
) -> Result<(Vec<Vec<String>>, PathBuf)> {
    let catalog = read_catalog(catalog_path)?;
    let names = extract_command_names(&catalog.requirement_units, target);
    let (mapping, default) = extract_compatibility_mapping(&catalog.requirement_units, target);
    let table = build_sequential_compatibility_table(&names, &mapping, default.as_deref());
    let written = write_compatibility_csv(&table, output)?;
    Ok((table, written))
}

/// Execute the table command.
pub fn execute_table(args: TableArgs, config: &PipelineConfig, formatter: &Formatter) -> Result<()> {
    let target = args
        .target
        .unwrap_or(config.commands.target_requirement_index);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.commands.compatibility_csv_path));

    let (table, written) = render_catalog_table(&args.catalog, target, &output)?;
    println!("{}", formatter.format_compatibility_table(&table));
    println!(
        "{}",
        formatter.success(&format!("Wrote {}", written.display()))
    );
    Ok(())
}
