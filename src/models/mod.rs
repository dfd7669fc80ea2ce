//! Core data models for Budget Planner
//!
//! This module contains the data structures of the planner domain: expense
//! items, their identifiers, money amounts and the list ordering.

pub mod expense;
pub mod ids;
pub mod money;
pub mod sort;

pub use expense::{seed_items, ExpenseItem};
pub use ids::{ExpenseId, IdGenerator, SequentialGenerator, UuidGenerator};
pub use money::{coerce_number, Money};
pub use sort::SortMode;
