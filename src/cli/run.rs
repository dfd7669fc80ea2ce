//! Run CLI command
//!
//! Replays a script of intents against the starting planner state and prints
//! the result. `show` lines print intermediate snapshots.

use clap::Args;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::export::{write_snapshot, OutputFormat};
use crate::services::{parse_script, BudgetStore, Outcome, ScriptStep};

/// Arguments for `run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file, or `-` to read from stdin
    pub script: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Tally of what a script did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub applied: usize,
    pub ignored: usize,
}

/// Handle the run command
pub fn handle_run_command(settings: &Settings, args: RunArgs) -> PlannerResult<()> {
    let script = read_script(&args.script)?;
    let mut store = BudgetStore::from_settings(settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut diagnostics = stderr.lock();

    let report = run_script(
        &mut store,
        &script,
        &settings.currency_symbol,
        args.format,
        &mut out,
        &mut diagnostics,
    )?;
    out.flush()?;

    info!(
        applied = report.applied,
        ignored = report.ignored,
        "script finished"
    );
    Ok(())
}

/// Apply every step of `script`, then print the final snapshot
///
/// The whole script is parsed before anything runs, so a malformed line
/// leaves the store untouched. Ignored intents are reported on
/// `diagnostics` and do not stop the run.
pub fn run_script<W: Write, E: Write>(
    store: &mut BudgetStore,
    script: &str,
    currency_symbol: &str,
    format: OutputFormat,
    out: &mut W,
    diagnostics: &mut E,
) -> PlannerResult<RunReport> {
    let steps = parse_script(script)?;
    let mut report = RunReport::default();

    for (line_no, step) in steps {
        match step {
            ScriptStep::Show => {
                write_snapshot(&store.snapshot(), currency_symbol, format, out)?;
            }
            ScriptStep::Apply(intent) => match intent.apply(store) {
                Outcome::Applied => report.applied += 1,
                Outcome::Ignored(reason) => {
                    report.ignored += 1;
                    warn!(line = line_no, %intent, %reason, "intent ignored");
                    writeln!(diagnostics, "line {}: ignored '{}': {}", line_no, intent, reason)?;
                }
            },
        }
    }

    write_snapshot(&store.snapshot(), currency_symbol, format, out)?;
    Ok(report)
}

fn read_script(path: &PathBuf) -> PlannerResult<String> {
    if path.as_os_str() == "-" {
        let mut script = String::new();
        io::stdin().read_to_string(&mut script)?;
        return Ok(script);
    }

    std::fs::read_to_string(path).map_err(|e| {
        PlannerError::Io(format!("Failed to read script {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn run(script: &str) -> (BudgetStore, RunReport, String, String) {
        let mut store = BudgetStore::seeded();
        let mut out: Vec<u8> = Vec::new();
        let mut diagnostics: Vec<u8> = Vec::new();
        let report = run_script(
            &mut store,
            script,
            "৳",
            OutputFormat::Text,
            &mut out,
            &mut diagnostics,
        )
        .unwrap();
        (
            store,
            report,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diagnostics).unwrap(),
        )
    }

    #[test]
    fn test_run_applies_steps_in_order() {
        let (store, report, out, diagnostics) =
            run("budget 10000\nadd Coffee 120\nremove #11003\nsort asc\n");

        assert_eq!(report, RunReport { applied: 4, ignored: 0 });
        assert!(diagnostics.is_empty());
        assert_eq!(store.compute_spent(), Money::from_units(2520));
        assert_eq!(store.compute_remaining(), Money::from_units(7480));
        assert!(out.contains("Remaining:     ৳ 7480"));
    }

    #[test]
    fn test_ignored_intents_are_reported() {
        let (store, report, _out, diagnostics) = run("add Coffee 0\nbudget 0\nremove #1\n");

        assert_eq!(report, RunReport { applied: 0, ignored: 3 });
        assert_eq!(store.state().items.len(), 3);
        assert!(diagnostics.contains("line 1: ignored 'add Coffee 0': cost cannot be zero"));
        assert!(diagnostics.contains("line 2: ignored 'budget 0': budget cannot be zero"));
        assert!(diagnostics.contains("line 3: ignored 'remove #1': no such expense"));
    }

    #[test]
    fn test_show_prints_intermediate_snapshots() {
        let (_store, _report, out, _) = run("show\nbudget 500\n");
        assert_eq!(out.matches("My Budget Planner").count(), 2);
        assert!(out.contains("Budget:        ৳ 20000"));
        assert!(out.contains("Budget:        ৳ 500"));
    }

    #[test]
    fn test_malformed_script_changes_nothing() {
        let mut store = BudgetStore::seeded();
        let before = store.state().clone();
        let err = run_script(
            &mut store,
            "budget 100\nexplode\n",
            "৳",
            OutputFormat::Text,
            &mut Vec::<u8>::new(),
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();

        assert!(matches!(err, PlannerError::Parse { line: 2, .. }));
        assert_eq!(store.state(), &before);
    }
}
