//! Expense Tracker - menu-driven personal expense tracking
//!
//! This library provides the core of a small command-line expense tracker.
//! Expenses live in a single JSON document on disk which is loaded in full at
//! startup and rewritten in full after every addition.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Store path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, ids and money amounts
//! - `storage`: JSON file storage layer
//! - `services`: The expense manager (ids, aggregates, persistence)
//! - `display`: Text formatting for lists and reports
//! - `cli`: The interactive menu shell
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::Money;
//! use expense_tracker::services::ExpenseManager;
//! use expense_tracker::storage::JsonStorage;
//!
//! # fn main() -> Result<(), expense_tracker::ExpenseError> {
//! let storage = JsonStorage::new("data.json")?;
//! let mut manager = ExpenseManager::new(storage)?;
//! manager.add(Money::from_cents(1250), "food", "lunch")?;
//! println!("{}", manager.total_all());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
