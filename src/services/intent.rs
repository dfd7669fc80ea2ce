//! User intents and the line-oriented syntax they are written in
//!
//! The same syntax drives the `run` subcommand and the TUI command line:
//!
//! ```text
//! budget 25000
//! add Coffee beans 120
//! remove #11002
//! sort asc
//! show
//! ```
//!
//! Amounts are kept as typed and coerced when the intent is applied, so
//! `add Tea abc` parses fine and is then rejected by the store. Only structurally malformed lines are
//! parse errors.

use std::fmt;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{coerce_number, SortMode};
use crate::services::budget::{BudgetStore, Outcome, Rejection};

/// A state change requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the total budget
    SetBudget(String),
    /// Add a new expense
    AddItem { name: String, cost: String },
    /// Remove the expense a reference (`#11001`, `exp-1a2b3c4d`) points at
    RemoveItem(String),
    /// Change the display ordering
    SetSortMode(SortMode),
}

impl Intent {
    /// Apply this intent to the store
    pub fn apply(&self, store: &mut BudgetStore) -> Outcome {
        match self {
            Self::SetBudget(value) => store.set_budget(coerce_number(value)),
            Self::AddItem { name, cost } => store.add_item(name.clone(), coerce_number(cost)),
            Self::RemoveItem(reference) => match store.state().resolve(reference) {
                Some(id) => store.remove_item(id),
                None => Outcome::Ignored(Rejection::UnknownItem),
            },
            Self::SetSortMode(mode) => store.set_sort_mode(*mode),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetBudget(value) => write!(f, "budget {}", value),
            Self::AddItem { name, cost } => write!(f, "add {} {}", name, cost),
            Self::RemoveItem(reference) => write!(f, "remove {}", reference),
            Self::SetSortMode(mode) => write!(f, "sort {}", mode),
        }
    }
}

/// One executable line of a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Change the state
    Apply(Intent),
    /// Print the current state
    Show,
}

/// Parse a single line
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str, line_no: usize) -> PlannerResult<Option<ScriptStep>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = words.collect();

    let step = match keyword.as_str() {
        "budget" => {
            let value = single_arg(&args, line_no, "budget <value>")?;
            ScriptStep::Apply(Intent::SetBudget(value.to_string()))
        }
        "add" => {
            let (cost, name) = args.split_last().ok_or_else(|| {
                PlannerError::parse(line_no, "usage: add <name> <cost>")
            })?;
            ScriptStep::Apply(Intent::AddItem {
                name: name.join(" "),
                cost: cost.to_string(),
            })
        }
        "remove" | "rm" | "delete" => {
            let reference = single_arg(&args, line_no, "remove <id>")?;
            ScriptStep::Apply(Intent::RemoveItem(reference.to_string()))
        }
        "sort" => {
            let mode = single_arg(&args, line_no, "sort default|asc|desc")?;
            let mode = mode
                .parse::<SortMode>()
                .map_err(|e| PlannerError::parse(line_no, e.to_string()))?;
            ScriptStep::Apply(Intent::SetSortMode(mode))
        }
        "show" => {
            if !args.is_empty() {
                return Err(PlannerError::parse(line_no, "usage: show"));
            }
            ScriptStep::Show
        }
        other => {
            return Err(PlannerError::parse(
                line_no,
                format!("unknown command '{}'", other),
            ))
        }
    };

    Ok(Some(step))
}

/// Parse a whole script, keeping the line number of every step
pub fn parse_script(text: &str) -> PlannerResult<Vec<(usize, ScriptStep)>> {
    let mut steps = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if let Some(step) = parse_line(line, line_no)? {
            steps.push((line_no, step));
        }
    }
    Ok(steps)
}

fn single_arg<'a>(args: &[&'a str], line_no: usize, usage: &str) -> PlannerResult<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(PlannerError::parse(line_no, format!("usage: {}", usage))),
    }
}
