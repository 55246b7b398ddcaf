//! Expense manager
//!
//! Holds every expense in memory, hands out sequential ids, and rewrites the
//! full store document after each mutation.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, Record};
use crate::storage::{JsonStorage, StoreDocument};

/// Sum of all expenses in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Owns the expense list and delegates persistence to [`JsonStorage`]
///
/// The sum of absolute amounts always fits in an `i64` of cents, so every
/// total the manager reports is exact.
pub struct ExpenseManager {
    storage: JsonStorage,
    expenses: Vec<Expense>,
    next_id: ExpenseId,
    magnitude: Money,
}

/// Sum of absolute amounts, `None` if it would overflow
fn magnitude_of(expenses: &[Expense]) -> Option<Money> {
    expenses
        .iter()
        .try_fold(Money::zero(), |acc, e| acc.checked_add(e.amount().abs()))
}

impl ExpenseManager {
    /// Create a manager, loading the current document from storage
    ///
    /// Records of any type other than `expense` are skipped. A store whose
    /// amounts cannot be totalled exactly is a `Parse` error.
    pub fn new(storage: JsonStorage) -> ExpenseResult<Self> {
        let document = storage.load()?;
        let total_records = document.len();

        let expenses: Vec<Expense> = document
            .records
            .into_iter()
            .filter_map(Record::into_expense)
            .collect();

        let skipped = total_records - expenses.len();
        if skipped > 0 {
            warn!(skipped, "ignoring records of unknown type");
        }

        let magnitude = magnitude_of(&expenses).ok_or_else(|| {
            ExpenseError::Parse(format!(
                "Amounts in {} exceed the supported total",
                storage.path().display()
            ))
        })?;

        // Never hand out an id that is already on disk
        let next_id = match expenses.iter().map(Expense::id).max() {
            Some(max_id) if document.next_id <= max_id => {
                let repaired = max_id.next().map_err(|_| {
                    ExpenseError::Parse(format!("Expense id {} leaves no id to assign", max_id))
                })?;
                warn!(
                    stored = %document.next_id,
                    repaired = %repaired,
                    "next_id behind stored expenses, advancing"
                );
                repaired
            }
            _ => document.next_id,
        };

        info!(expenses = expenses.len(), next_id = %next_id, "expense store loaded");

        Ok(Self {
            storage,
            expenses,
            next_id,
            magnitude,
        })
    }

    /// Record a new expense and persist the whole store
    ///
    /// Callers validate the amount and category first (see
    /// [`ExpenseDraft::validate`](crate::models::ExpenseDraft::validate)).
    /// An amount above [`Money::MAX`], a total that would overflow, or an
    /// exhausted id counter is a `Validation` error. If the write fails the
    /// in-memory state is left as it was.
    pub fn add(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> ExpenseResult<Expense> {
        if amount.abs() > Money::MAX {
            return Err(ExpenseError::Validation(format!(
                "Amount {} is larger than {}",
                amount,
                Money::MAX
            )));
        }
        let magnitude = self.magnitude.checked_add(amount.abs()).ok_or_else(|| {
            ExpenseError::Validation("Total of all expenses would be too large".into())
        })?;
        let following = self.next_id.next()?;

        let expense = Expense::new(self.next_id, amount, category, note);
        let previous = (self.next_id, self.magnitude);

        self.expenses.push(expense.clone());
        self.next_id = following;
        self.magnitude = magnitude;

        if let Err(e) = self.persist() {
            self.expenses.pop();
            (self.next_id, self.magnitude) = previous;
            return Err(e);
        }

        info!(
            id = %expense.id(),
            category = expense.category(),
            amount = %expense.amount(),
            "expense added"
        );
        Ok(expense)
    }

    /// All expenses in insertion order (a copy)
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Totals per category, in the order each category was first used
    pub fn totals_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in &self.expenses {
            match index.get(expense.category()) {
                Some(&i) => totals[i].total += expense.amount(),
                None => {
                    index.insert(expense.category(), totals.len());
                    totals.push(CategoryTotal {
                        category: expense.category().to_string(),
                        total: expense.amount(),
                    });
                }
            }
        }

        totals
    }

    /// Sum of every expense (zero when there are none)
    pub fn total_all(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Id the next added expense will receive
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    fn document(&self) -> StoreDocument {
        StoreDocument {
            next_id: self.next_id,
            records: self.expenses.iter().cloned().map(Record::from).collect(),
        }
    }

    fn persist(&self) -> ExpenseResult<()> {
        debug!(expenses = self.expenses.len(), "persisting expense store");
        self.storage.save(&self.document())
    }
}
