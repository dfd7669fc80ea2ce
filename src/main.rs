use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use budget_planner::cli::{handle_run_command, handle_summary_command, RunArgs, SummaryArgs};
use budget_planner::config::{paths::PlannerPaths, settings::Settings};
use budget_planner::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "budget-planner",
    author = "Kaylee Beyene",
    version,
    about = "Terminal budget planner",
    long_about = "Budget Planner tracks a single budget against a list of expenses. \
                  Launch the interactive interface with 'budget-planner tui', or \
                  print and script the planner from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print the starting budget, totals and expenses
    Summary(SummaryArgs),

    /// Apply a script of intents and print the result
    Run(RunArgs),

    /// Write default settings to the config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it stays quiet unless asked otherwise
    let default_directive = match cli.command {
        Some(Commands::Tui) => "off",
        _ => "budget_planner=warn",
    };
    init_tracing(default_directive);

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    info!(dir = %paths.base_dir().display(), "settings loaded");

    match cli.command {
        Some(Commands::Tui) => {
            budget_planner::tui::run_tui(&settings)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Run(args)) => {
            handle_run_command(&settings, args)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Already initialized: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("Budget Planner Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default budget:  {}", settings.default_budget);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default sort:    {}", settings.default_sort);
            println!("  Id strategy:     {:?}", settings.id_strategy);
            println!("  Seed items:      {}", settings.seed_items);
        }
        None => {
            handle_summary_command(&settings, SummaryArgs::default())?;
            println!();
            println!("Run 'budget-planner --help' for usage information.");
            println!("Run 'budget-planner tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
