//! Diagnostic logging setup
//!
//! Events go to stderr so they never mix with the menus on stdout. The filter
//! comes from `EXPENSE_TRACKER_LOG` (e.g. `debug`, `expense_tracker=info`)
//! and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment, falling back to the default level
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; later calls are ignored
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
