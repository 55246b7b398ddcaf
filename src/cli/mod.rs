//! Interactive command-line shell
//!
//! Text menus over any `BufRead`/`Write` pair, so the whole interaction can
//! be driven from tests as well as from a terminal.

pub mod app;
pub mod menu;
pub mod prompt;

pub use app::ExpenseTrackerApp;
pub use menu::Menu;
pub use prompt::Prompter;
