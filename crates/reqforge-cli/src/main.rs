//! Reqforge CLI - Build requirement catalogs from specification documents.

use clap::Parser;
use reqforge_cli::{commands, logging};
use reqforge_cli::{Cli, Command, Formatter, PipelineConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> reqforge_cli::Result<()> {
    let cli = Cli::parse();
    let config = PipelineConfig::load(cli.config.as_deref())?;

    logging::init_logging(&config.logging)?;

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Run(args) => commands::execute_run(args, config, &formatter)?,
        Command::Table(args) => commands::execute_table(args, &config, &formatter)?,
        Command::Chunk(args) => commands::execute_chunk(args, &config)?,
    }

    Ok(())
}
