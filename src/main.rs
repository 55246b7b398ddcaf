use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use expense_tracker::cli::ExpenseTrackerApp;
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging;
use expense_tracker::services::ExpenseManager;
use expense_tracker::storage::JsonStorage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Menu-driven personal expense tracker",
    long_about = "Records expenses to a local JSON file (data.json in the working \
                  directory, or the file named by EXPENSE_TRACKER_DATA_FILE) and \
                  prints totals by category. All interaction happens through \
                  numbered text menus."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let paths = ExpensePaths::new();
    let settings = Settings::load_or_default(&paths).context("Failed to load settings")?;

    let storage = JsonStorage::new(paths.data_file()).with_context(|| {
        format!("Failed to open expense store {}", paths.data_file().display())
    })?;
    let manager = ExpenseManager::new(storage).with_context(|| {
        format!("Failed to load expense store {}", paths.data_file().display())
    })?;

    let stdin = io::stdin();
    let mut app = ExpenseTrackerApp::new(manager, settings, stdin.lock(), io::stdout());
    app.run().context("Expense tracker stopped")?;

    Ok(())
}
