//! Display formatting for terminal output
//!
//! Plain-text rendering of the planner for the command line.

pub mod summary;

pub use summary::{format_expense_table, format_summary, format_totals, EMPTY_MESSAGE};
