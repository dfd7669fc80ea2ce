//! Budget summary formatting
//!
//! Renders a snapshot as the plain-text view used by the CLI: the three
//! totals followed by the expense table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::ExpenseItem;
use crate::services::BudgetSnapshot;

/// Shown instead of the table when there are no expenses
pub const EMPTY_MESSAGE: &str = "Add some new budgets to your planner.";

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

impl ExpenseRow {
    fn new(item: &ExpenseItem, symbol: &str) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            cost: item.cost.format_with_symbol(symbol),
        }
    }
}

/// Format the three headline totals
pub fn format_totals(snapshot: &BudgetSnapshot, symbol: &str) -> String {
    format!(
        "Budget:        {}\nRemaining:     {}\nSpent so far:  {}\n",
        snapshot.total_budget.format_with_symbol(symbol),
        snapshot.remaining.format_with_symbol(symbol),
        snapshot.spent.format_with_symbol(symbol),
    )
}

/// Format the expense list in display order
pub fn format_expense_table(items: &[ExpenseItem], symbol: &str) -> String {
    if items.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let rows: Vec<ExpenseRow> = items.iter().map(|i| ExpenseRow::new(i, symbol)).collect();
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string()
}

/// Format the complete summary view
pub fn format_summary(snapshot: &BudgetSnapshot, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("My Budget Planner\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format_totals(snapshot, symbol));
    output.push('\n');

    output.push_str(&format!("Expenses ({})\n", snapshot.sort_mode.label()));
    output.push_str(&format_expense_table(&snapshot.items, symbol));
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortMode;
    use crate::services::BudgetStore;

    #[test]
    fn test_format_totals() {
        let store = BudgetStore::seeded();
        let totals = format_totals(&store.snapshot(), "৳");
        assert!(totals.contains("Budget:        ৳ 20000"));
        assert!(totals.contains("Remaining:     ৳ 17000"));
        assert!(totals.contains("Spent so far:  ৳ 3000"));
    }

    #[test]
    fn test_table_follows_sort_order() {
        let mut store = BudgetStore::seeded();
        store.set_sort_mode(SortMode::Asc);
        let summary = format_summary(&store.snapshot(), "$");

        let fuel = summary.find("Fuel").unwrap();
        let transport = summary.find("Transportation").unwrap();
        let shopping = summary.find("Shopping").unwrap();
        assert!(fuel < transport && transport < shopping);
        assert!(summary.contains("Expenses (Low to High)"));
        assert!(summary.contains("#11001"));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let mut store = BudgetStore::seeded();
        let ids: Vec<_> = store.state().items.iter().map(|i| i.id).collect();
        for id in ids {
            store.remove_item(id);
        }

        let summary = format_summary(&store.snapshot(), "৳");
        assert!(summary.contains(EMPTY_MESSAGE));
        assert!(summary.contains("Spent so far:  ৳ 0"));
    }

    #[test]
    fn test_overspend_shows_negative_remaining() {
        let mut store = BudgetStore::seeded();
        store.set_budget(1000.0);
        let totals = format_totals(&store.snapshot(), "$");
        assert!(totals.contains("Remaining:     -$ 2000"));
    }
}
