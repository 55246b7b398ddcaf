//! Service layer for the expense tracker
//!
//! The service layer owns the in-memory expense list on top of the storage
//! layer, assigns ids, and computes aggregates on demand.

pub mod expense;

pub use expense::{CategoryTotal, ExpenseManager};
