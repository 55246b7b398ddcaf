//! Expense list formatting

use super::EMPTY_MESSAGE;
use crate::models::Expense;

/// Format every expense as one summary line under a header
pub fn format_expense_list(expenses: &[Expense], unit: &str) -> String {
    if expenses.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut output = String::from("Your expenses:\n");
    for expense in expenses {
        output.push_str(&expense.summary(unit));
        output.push('\n');
    }

    output
}
