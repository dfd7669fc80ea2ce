//! Budget Planner - a small terminal budget tracker
//!
//! The planner keeps a single total budget and a list of named expenses,
//! and derives what has been spent and what remains. Invalid input (a zero
//! or non-numeric amount) is ignored rather than reported as an error.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense items, ids, money and sort order
//! - `services`: The budget store and the intents that drive it
//! - `cli`: Non-interactive subcommands
//! - `display`: Text rendering of a planner snapshot
//! - `export`: JSON and YAML snapshots
//! - `tui`: The interactive interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use budget_planner::services::{BudgetStore, Outcome};
//!
//! let mut store = BudgetStore::seeded();
//! assert_eq!(store.add_item("Coffee", 120.0), Outcome::Applied);
//! assert!(!store.set_budget(0.0).is_applied());
//! assert_eq!(store.compute_spent().to_string(), "3120");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::PlannerError;
