//! Business logic layer
//!
//! The budget store and the ways user input reaches it.

pub mod budget;
pub mod intent;
pub mod prompt;

pub use budget::{BudgetSnapshot, BudgetState, BudgetStore, Outcome, Rejection};
pub use intent::{parse_line, parse_script, Intent, ScriptStep};
pub use prompt::{edit_budget, LinePrompt, ValuePrompt};
