//! YAML export of the planner state

use std::io::Write;

use crate::error::PlannerResult;
use crate::export::json::SnapshotExport;
use crate::services::BudgetSnapshot;

/// Write a snapshot as YAML
pub fn export_snapshot_yaml<W: Write>(
    snapshot: &BudgetSnapshot,
    currency_symbol: &str,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = SnapshotExport::from_snapshot(snapshot, currency_symbol);

    writeln!(writer, "# Budget Planner snapshot")?;
    serde_yaml::to_writer(&mut *writer, &export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortMode;
    use crate::services::BudgetStore;

    #[test]
    fn test_yaml_export() {
        let mut store = BudgetStore::seeded();
        store.set_sort_mode(SortMode::Desc);

        let mut output = Vec::new();
        export_snapshot_yaml(&store.snapshot(), "৳", &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Budget Planner snapshot"));
        assert!(text.contains("sort_mode: desc"));
        assert!(text.contains("name: Shopping"));

        let parsed: SnapshotExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.spent, 3000.0);
    }
}
