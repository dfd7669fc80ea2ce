//! Expense item model
//!
//! A single named cost entry. Items are created whole and never edited; the
//! only way to change one is to delete it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single named cost contributing to total spend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub name: String,

    /// Cost of the item
    pub cost: Money,
}

impl ExpenseItem {
    /// Create a new expense item
    pub fn new(id: ExpenseId, name: impl Into<String>, cost: Money) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
        }
    }
}

impl fmt::Display for ExpenseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.cost)
    }
}

/// The items a fresh planner starts with
pub fn seed_items() -> Vec<ExpenseItem> {
    vec![
        ExpenseItem::new(ExpenseId::Numeric(11001), "Shopping", Money::from_units(1500)),
        ExpenseItem::new(
            ExpenseId::Numeric(11002),
            "Transportation",
            Money::from_units(900),
        ),
        ExpenseItem::new(ExpenseId::Numeric(11003), "Fuel", Money::from_units(600)),
    ]
}
