//! Display formatting for terminal output
//!
//! Pure text rendering of expenses and of already-computed aggregates.
//! Nothing in here computes totals or touches storage.

pub mod expense;
pub mod report;

pub use expense::format_expense_list;
pub use report::{format_category_line, format_category_totals, format_grand_total};

/// Shown wherever there is nothing to list
pub const EMPTY_MESSAGE: &str = "No expenses yet.";
