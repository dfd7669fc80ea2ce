//! Dialog modules for the TUI
//!
//! The add expense form plus the modal dialogs drawn over it

pub mod add_expense;
pub mod command;
pub mod edit_budget;
pub mod help;
