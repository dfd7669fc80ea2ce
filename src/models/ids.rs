//! Expense identifiers and the pluggable generators that mint them
//!
//! Seed items carry small numeric ids; items added at runtime get an id from
//! whichever [`IdGenerator`] the store was built with.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const UUID_PREFIX: &str = "exp-";
const NUMERIC_PREFIX: char = '#';

/// Identifier of a single expense item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
    /// Counter-based id (seed data, sequential generator)
    Numeric(u64),
    /// Random id
    Uuid(Uuid),
}

impl ExpenseId {
    /// Create a new random ID
    pub fn new_random() -> Self {
        Self::Uuid(Uuid::new_v4())
    }

    /// Get the numeric value, if this is a counter-based id
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Uuid(_) => None,
        }
    }

    /// Check whether a user-typed reference points at this id
    ///
    /// Accepts the full form (`#11001`, a full UUID) as well as the short
    /// `exp-xxxxxxxx` form shown in listings.
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim();
        match self {
            Self::Numeric(n) => reference
                .strip_prefix(NUMERIC_PREFIX)
                .unwrap_or(reference)
                .parse::<u64>()
                .map(|r| r == *n)
                .unwrap_or(false),
            Self::Uuid(uuid) => {
                let full = uuid.to_string();
                let short = reference.strip_prefix(UUID_PREFIX).unwrap_or(reference);
                short.len() >= 8 && full.starts_with(&short.to_lowercase())
            }
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}{}", NUMERIC_PREFIX, n),
            Self::Uuid(uuid) => write!(f, "{}{}", UUID_PREFIX, &uuid.to_string()[..8]),
        }
    }
}

/// Source of fresh, unique expense ids
pub trait IdGenerator {
    /// Produce an id that has not been handed out before
    fn next_id(&mut self) -> ExpenseId;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ExpenseId {
        ExpenseId::new_random()
    }
}

/// Monotonic counter
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    next: u64,
}

impl SequentialGenerator {
    /// Start counting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Start right after the highest numeric id already in use
    pub fn after<'a>(existing: impl IntoIterator<Item = &'a ExpenseId>) -> Self {
        let highest = existing
            .into_iter()
            .filter_map(ExpenseId::as_numeric)
            .max()
            .unwrap_or(0);
        Self::starting_at(highest + 1)
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> ExpenseId {
        let id = ExpenseId::Numeric(self.next);
        self.next += 1;
        id
    }
}
