//! Summary CLI command
//!
//! Prints the starting planner state, optionally after changing the budget
//! or sort order first.

use clap::Args;
use std::io::{self, Write};

use crate::config::settings::Settings;
use crate::error::PlannerResult;
use crate::export::{write_snapshot, OutputFormat};
use crate::models::SortMode;
use crate::services::{edit_budget, BudgetStore, LinePrompt, Outcome};

/// Arguments for `summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Ordering of the expense list
    #[arg(short, long, value_enum)]
    pub sort: Option<SortMode>,

    /// Replace the budget before printing (zero or non-numbers are ignored)
    #[arg(short, long, allow_hyphen_values = true)]
    pub budget: Option<String>,

    /// Ask for a new budget on stdin before printing
    #[arg(long, conflicts_with = "budget")]
    pub ask_budget: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> PlannerResult<()> {
    let mut store = BudgetStore::from_settings(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.ask_budget {
        let stdin = io::stdin();
        let mut prompt = LinePrompt::new(stdin.lock(), io::stderr());
        report(edit_budget(&mut store, &mut prompt));
    }

    apply_summary_args(&mut store, &args);
    write_snapshot(
        &store.snapshot(),
        &settings.currency_symbol,
        args.format,
        &mut out,
    )?;
    out.flush()?;

    Ok(())
}

/// Apply the non-interactive options to the store
pub fn apply_summary_args(store: &mut BudgetStore, args: &SummaryArgs) {
    if let Some(ref raw) = args.budget {
        report(store.set_budget(crate::models::coerce_number(raw)));
    }
    if let Some(mode) = args.sort {
        store.set_sort_mode(mode);
    }
}

fn report(outcome: Outcome) {
    if let Outcome::Ignored(reason) = outcome {
        eprintln!("Budget unchanged: {}", reason);
    }
}
