//! Strongly-typed expense identifier
//!
//! Ids are positive integers assigned sequentially by the manager. The
//! newtype rejects zero at construction, including when read from disk.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ExpenseError;

/// Identifier of a stored expense (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id handed out to the first expense of a fresh store
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an id, rejecting zero
    pub fn new(value: u64) -> Result<Self, ExpenseError> {
        if value == 0 {
            return Err(ExpenseError::Validation(
                "Expense id must be a positive integer".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one, or a `Validation` error once ids run out
    pub fn next(&self) -> Result<Self, ExpenseError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| ExpenseError::Validation("No expense ids left to assign".into()))
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for ExpenseId {
    type Error = ExpenseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExpenseId> for u64 {
    fn from(id: ExpenseId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rejected() {
        assert!(ExpenseId::new(0).is_err());
        assert_eq!(ExpenseId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_next() {
        assert_eq!(ExpenseId::FIRST.next().unwrap().get(), 2);
    }

    #[test]
    fn test_next_at_u64_max() {
        let last = ExpenseId::new(u64::MAX).unwrap();
        assert!(last.next().unwrap_err().is_validation());
    }

    #[test]
    fn test_serialization() {
        let id = ExpenseId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<ExpenseId>("42").unwrap(), id);
        assert!(serde_json::from_str::<ExpenseId>("0").is_err());
    }
}
