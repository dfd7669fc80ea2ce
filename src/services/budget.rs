//! Budget service
//!
//! Holds the planner state and the rules for changing it. `BudgetState`
//! transitions are pure: each takes the old state by value and returns the
//! new one. `BudgetStore` owns a state plus an id generator and applies those
//! transitions on behalf of the presentation layer.
//!
//! Nothing here fails. Invalid input is absorbed and reported back as an
//! [`Outcome::Ignored`] so the caller can tell the user what happened.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::config::settings::{IdStrategy, Settings};
use crate::models::{
    seed_items, ExpenseId, ExpenseItem, IdGenerator, Money, SequentialGenerator, SortMode,
    UuidGenerator,
};

/// Budget a fresh planner starts with
pub const DEFAULT_BUDGET: Money = Money::from_units(20_000);

/// Draws allowed before falling back to a random id on collision
const MAX_ID_ATTEMPTS: usize = 16;

/// Why an operation left the state untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Budget was NaN or infinite
    InvalidBudget,
    /// Budget was zero (also what a cancelled prompt coerces to)
    ZeroBudget,
    /// Cost was NaN or infinite
    InvalidCost,
    /// Cost was exactly zero
    ZeroCost,
    /// No item with the given id
    UnknownItem,
    /// The totals would no longer fit in a `Money`
    OutOfRange,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidBudget => "budget is not a number",
            Self::ZeroBudget => "budget cannot be zero",
            Self::InvalidCost => "cost is not a number",
            Self::ZeroCost => "cost cannot be zero",
            Self::UnknownItem => "no such expense",
            Self::OutOfRange => "amount out of range",
        };
        f.write_str(msg)
    }
}

/// Result of applying a user intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state changed
    Applied,
    /// The input was absorbed as a no-op
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Validate a raw budget value
///
/// NaN, infinities and zero are rejected. A non-zero amount below half a
/// cent is kept as one cent.
pub fn budget_value(value: f64) -> Result<Money, Rejection> {
    if value.is_nan() {
        return Err(Rejection::InvalidBudget);
    }
    if value == 0.0 {
        return Err(Rejection::ZeroBudget);
    }
    Money::from_f64_nonzero(value).ok_or(Rejection::InvalidBudget)
}

/// Validate a raw cost value
///
/// Zero is rejected. Negative costs are accepted and reduce the spend.
pub fn cost_value(value: f64) -> Result<Money, Rejection> {
    if value == 0.0 {
        return Err(Rejection::ZeroCost);
    }
    Money::from_f64_nonzero(value).ok_or(Rejection::InvalidCost)
}

/// The complete planner state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetState {
    /// Ceiling that spend is compared against
    pub total_budget: Money,

    /// Expense items, newest first
    pub items: Vec<ExpenseItem>,

    /// Ordering selected for display
    pub sort_mode: SortMode,
}

impl BudgetState {
    /// Create a state with the given budget and items
    pub fn new(total_budget: Money, items: Vec<ExpenseItem>) -> Self {
        Self {
            total_budget,
            items,
            sort_mode: SortMode::Default,
        }
    }

    /// The state a fresh planner starts with
    pub fn seeded() -> Self {
        Self::new(DEFAULT_BUDGET, seed_items())
    }

    /// Replace the budget
    pub fn with_budget(self, total_budget: Money) -> Self {
        Self {
            total_budget,
            ..self
        }
    }

    /// Insert an item at the front of the list
    pub fn with_item(mut self, item: ExpenseItem) -> Self {
        self.items.insert(0, item);
        self
    }

    /// Drop the item with `id`; the flag tells whether anything was removed
    pub fn without_item(mut self, id: ExpenseId) -> (Self, bool) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        (self, removed)
    }

    /// Select a display ordering
    pub fn with_sort_mode(self, sort_mode: SortMode) -> Self {
        Self { sort_mode, ..self }
    }

    /// Sum of all item costs
    pub fn spent(&self) -> Money {
        self.items.iter().map(|item| item.cost).sum()
    }

    /// Budget minus spend; negative when overspent
    pub fn remaining(&self) -> Money {
        self.total_budget - self.spent()
    }

    /// A freshly ordered copy of the items; the stored order is untouched
    ///
    /// Ties keep their insertion order.
    pub fn sorted_view(&self, mode: SortMode) -> Vec<ExpenseItem> {
        let mut view = self.items.clone();
        match mode {
            SortMode::Default => {}
            SortMode::Asc => view.sort_by_key(|item| item.cost),
            SortMode::Desc => view.sort_by(|a, b| b.cost.cmp(&a.cost)),
        }
        view
    }

    /// Whether there are no items at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether an id is already taken
    pub fn contains(&self, id: ExpenseId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Find the id of the item a user-typed reference points at
    pub fn resolve(&self, reference: &str) -> Option<ExpenseId> {
        self.items
            .iter()
            .find(|item| item.id.matches(reference))
            .map(|item| item.id)
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub total_budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub sort_mode: SortMode,
    /// Items in display order
    pub items: Vec<ExpenseItem>,
    /// True when the underlying list has no items
    pub is_empty: bool,
}

/// Owner of the planner state
pub struct BudgetStore {
    state: BudgetState,
    ids: Box<dyn IdGenerator>,
}

impl BudgetStore {
    /// Create a store over `state` that mints ids with `ids`
    pub fn new(state: BudgetState, ids: Box<dyn IdGenerator>) -> Self {
        Self { state, ids }
    }

    /// The seeded state with random ids
    pub fn seeded() -> Self {
        Self::new(BudgetState::seeded(), Box::new(UuidGenerator))
    }

    /// Build the initial store described by the user's settings
    pub fn from_settings(settings: &Settings) -> Self {
        let total_budget = budget_value(settings.default_budget).unwrap_or_else(|reason| {
            warn!(
                "configured default budget {} ignored ({}), using {}",
                settings.default_budget, reason, DEFAULT_BUDGET
            );
            DEFAULT_BUDGET
        });

        let items = if settings.seed_items {
            seed_items()
        } else {
            Vec::new()
        };

        let ids: Box<dyn IdGenerator> = match settings.id_strategy {
            IdStrategy::Uuid => Box::new(UuidGenerator),
            IdStrategy::Sequential => {
                Box::new(SequentialGenerator::after(items.iter().map(|item| &item.id)))
            }
        };

        let state = BudgetState::new(total_budget, items).with_sort_mode(settings.default_sort);
        debug!(
            budget = %state.total_budget,
            items = state.items.len(),
            "budget store initialized"
        );
        Self::new(state, ids)
    }

    /// Read-only access to the current state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Replace the budget unless `value` is NaN, infinite or zero
    pub fn set_budget(&mut self, value: f64) -> Outcome {
        let checked = budget_value(value).and_then(|amount| {
            amount
                .checked_sub(self.state.spent())
                .map(|_| amount)
                .ok_or(Rejection::OutOfRange)
        });
        match checked {
            Ok(amount) => {
                debug!(from = %self.state.total_budget, to = %amount, "budget updated");
                self.apply(|state| state.with_budget(amount));
                Outcome::Applied
            }
            Err(reason) => {
                warn!(value, %reason, "budget change ignored");
                Outcome::Ignored(reason)
            }
        }
    }

    /// Add a new item at the front of the list unless `cost` is zero
    pub fn add_item(&mut self, name: impl Into<String>, cost: f64) -> Outcome {
        let name = name.into();
        let amount = match cost_value(cost).and_then(|amount| self.fits(amount)) {
            Ok(amount) => amount,
            Err(reason) => {
                warn!(name = %name, cost, %reason, "expense rejected");
                return Outcome::Ignored(reason);
            }
        };

        let id = self.fresh_id();
        debug!(%id, name = %name, cost = %amount, "expense added");
        self.apply(|state| state.with_item(ExpenseItem::new(id, name, amount)));
        Outcome::Applied
    }

    /// Remove the item with `id`; removing a missing item does nothing
    pub fn remove_item(&mut self, id: ExpenseId) -> Outcome {
        let (next, removed) = std::mem::take(&mut self.state).without_item(id);
        self.state = next;
        if removed {
            debug!(%id, "expense removed");
            Outcome::Applied
        } else {
            debug!(%id, "remove ignored, no such expense");
            Outcome::Ignored(Rejection::UnknownItem)
        }
    }

    /// Choose how the list is ordered for display
    pub fn set_sort_mode(&mut self, mode: SortMode) -> Outcome {
        debug!(%mode, "sort mode changed");
        self.apply(|state| state.with_sort_mode(mode));
        Outcome::Applied
    }

    /// Sum of all item costs
    pub fn compute_spent(&self) -> Money {
        self.state.spent()
    }

    /// Budget minus spend
    pub fn compute_remaining(&self) -> Money {
        self.state.remaining()
    }

    /// A newly ordered copy of the items
    pub fn sorted_view(&self, mode: SortMode) -> Vec<ExpenseItem> {
        self.state.sorted_view(mode)
    }

    /// Render payload for the current state
    pub fn snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            total_budget: self.state.total_budget,
            spent: self.compute_spent(),
            remaining: self.compute_remaining(),
            sort_mode: self.state.sort_mode,
            items: self.sorted_view(self.state.sort_mode),
            is_empty: self.state.is_empty(),
        }
    }

    /// Reject a cost that would push spent or remaining out of range
    fn fits(&self, cost: Money) -> Result<Money, Rejection> {
        self.state
            .spent()
            .checked_add(cost)
            .and_then(|spent| self.state.total_budget.checked_sub(spent))
            .map(|_| cost)
            .ok_or(Rejection::OutOfRange)
    }

    fn apply(&mut self, transition: impl FnOnce(BudgetState) -> BudgetState) {
        let current = std::mem::take(&mut self.state);
        self.state = transition(current);
    }

    fn fresh_id(&mut self) -> ExpenseId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.state.contains(id) {
                return id;
            }
            warn!(%id, "id generator returned an id already in use");
        }
        ExpenseId::new_random()
    }
}

impl Default for BudgetStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl fmt::Debug for BudgetStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BudgetStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
