//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod run;
pub mod summary;

pub use run::{handle_run_command, run_script, RunArgs, RunReport};
pub use summary::{handle_summary_command, SummaryArgs};
