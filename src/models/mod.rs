//! Core data models for the expense tracker
//!
//! This module contains the value types persisted in the store: expenses,
//! their ids and amounts, and the tagged record type.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseDraft, Record};
pub use ids::ExpenseId;
pub use money::Money;
