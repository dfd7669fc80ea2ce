//! Tracing setup
//!
//! Logs go to stderr so stdout stays clean for summaries and exports. The
//! filter comes from `BUDGET_PLANNER_LOG` (standard `EnvFilter` syntax).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "BUDGET_PLANNER_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once; later calls are no-ops
///
/// `default_directive` applies when the environment variable is unset or
/// invalid. The TUI passes `"off"` because it owns the terminal.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing("off");
        init_tracing("debug");
        tracing::debug!("still alive");
    }
}
