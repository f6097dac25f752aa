//! Output formatting for the CLI.

use crate::pipeline::RunReport;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Counts and output paths of a finished run.
    pub fn format_run_report(&self, report: &RunReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Item", "Value"]);

        let rows = [
            ("Run ID", report.run_id.clone()),
            ("Merged units", report.merged_units.to_string()),
            ("Chunks", report.chunks.to_string()),
            ("Requirements", report.requirements.to_string()),
            ("Annotated", report.annotated.to_string()),
            ("Compatibility pairs", report.compatibility_pairs.to_string()),
            ("Catalog", report.catalog_path.display().to_string()),
            ("Review", report.review_path.display().to_string()),
            ("Compatibility CSV", report.compatibility_csv_path.display().to_string()),
        ];
        for (item, value) in rows {
            builder.push_record([item.to_string(), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.success("Pipeline finished"), table)
    }

    /// Sequencing table as rendered in the CSV.
    pub fn format_compatibility_table(&self, table: &[Vec<String>]) -> String {
        if table.len() <= 1 {
            return self.warning("No commands on the target requirement.");
        }

        let mut builder = Builder::default();
        for row in table {
            builder.push_record(row.iter().map(|cell| self.colorize_state(cell)));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize_state(&self, cell: &str) -> String {
        match cell {
            "Y" => self.colorize(cell, "green"),
            "N" => self.colorize(cell, "red"),
            _ => cell.to_string(),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
