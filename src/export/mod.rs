//! Export module for Budget Planner
//!
//! Writes a snapshot of the planner in one of several formats:
//! - Text: the human-readable summary table
//! - JSON: for machine-readable output
//! - YAML: for human-readable structured output

pub mod json;
pub mod yaml;

use clap::ValueEnum;
use std::io::Write;

use crate::display::format_summary;
use crate::error::PlannerResult;
use crate::services::BudgetSnapshot;

pub use json::{export_snapshot_json, ExportedExpense, SnapshotExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;

/// Output format for snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Write a snapshot in the requested format
pub fn write_snapshot<W: Write>(
    snapshot: &BudgetSnapshot,
    currency_symbol: &str,
    format: OutputFormat,
    writer: &mut W,
) -> PlannerResult<()> {
    match format {
        OutputFormat::Text => {
            write!(writer, "{}", format_summary(snapshot, currency_symbol))?;
            Ok(())
        }
        OutputFormat::Json => export_snapshot_json(snapshot, currency_symbol, writer, true),
        OutputFormat::Yaml => export_snapshot_yaml(snapshot, currency_symbol, writer),
    }
}
