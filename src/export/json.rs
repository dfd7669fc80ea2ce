//! JSON export of the planner state
//!
//! Amounts are written in whole currency units so the output reads the same
//! way the screen does.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::PlannerResult;
use crate::models::{ExpenseItem, SortMode};
use crate::services::BudgetSnapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One expense as exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedExpense {
    /// Display form of the id (`#11001`, `exp-1a2b3c4d`)
    pub id: String,
    pub name: String,
    pub cost: f64,
}

impl From<&ExpenseItem> for ExportedExpense {
    fn from(item: &ExpenseItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            cost: item.cost.to_f64(),
        }
    }
}

/// The exported view of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,
    pub total_budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub sort_mode: SortMode,

    /// Expenses in display order
    pub items: Vec<ExportedExpense>,

    /// True when there are no expenses
    pub is_empty: bool,
}

impl SnapshotExport {
    /// Build the export form of a snapshot
    pub fn from_snapshot(snapshot: &BudgetSnapshot, currency_symbol: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: currency_symbol.to_string(),
            total_budget: snapshot.total_budget.to_f64(),
            spent: snapshot.spent.to_f64(),
            remaining: snapshot.remaining.to_f64(),
            sort_mode: snapshot.sort_mode,
            items: snapshot.items.iter().map(ExportedExpense::from).collect(),
            is_empty: snapshot.is_empty,
        }
    }
}

/// Write a snapshot as JSON
pub fn export_snapshot_json<W: Write>(
    snapshot: &BudgetSnapshot,
    currency_symbol: &str,
    writer: &mut W,
    pretty: bool,
) -> PlannerResult<()> {
    let export = SnapshotExport::from_snapshot(snapshot, currency_symbol);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;

    Ok(())
}
