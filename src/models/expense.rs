//! Expense model
//!
//! An expense is immutable once created. Amount and category rules are
//! checked by [`ExpenseDraft::validate`] at the input boundary, not here.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::ExpenseError;

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,

    #[serde(with = "timestamp")]
    created_at: NaiveDateTime,

    amount: Money,

    category: String,

    #[serde(default)]
    note: String,
}

impl Expense {
    /// Create an expense stamped with the current local time (whole seconds)
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(id, amount, category, note, Local::now().naive_local().trunc_subsecs(0))
    }

    /// Create an expense with an explicit creation time
    pub fn with_timestamp(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            created_at,
            amount,
            category: category.into(),
            note: note.into(),
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// One-line summary: `#id | created_at | category | amount unit | note`
    pub fn summary(&self, unit: &str) -> String {
        format!(
            "#{} | {} | {} | {} | {}",
            self.id,
            self.created_at.format(timestamp::FORMAT),
            self.category,
            self.amount.format_with_unit(unit),
            self.note
        )
    }
}

/// A persisted record, discriminated by its `type` field
///
/// Only expenses exist today. Any other `type` loads as `Unknown` and is
/// dropped by the manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Expense(Expense),
    #[serde(other)]
    Unknown,
}

impl Record {
    /// Get the expense if this record is one
    pub fn into_expense(self) -> Option<Expense> {
        match self {
            Record::Expense(expense) => Some(expense),
            Record::Unknown => None,
        }
    }
}

impl From<Expense> for Record {
    fn from(expense: Expense) -> Self {
        Record::Expense(expense)
    }
}

/// Unvalidated expense input collected from the user
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: String,
    pub note: String,
}

impl ExpenseDraft {
    pub fn new(amount: Money, category: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            note: note.into(),
        }
    }

    /// Reject non-positive amounts and blank categories
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !self.amount.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Amount must be greater than zero (got {})",
                self.amount
            )));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseError::Validation("Category cannot be empty".into()));
        }

        Ok(())
    }
}

/// ISO-8601 local timestamps, whole seconds unless the source carried a fraction
pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(SERIALIZE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<NaiveDateTime>()
            .map_err(|e| serde::de::Error::custom(format!("invalid created_at '{}': {}", s, e)))
    }
}
