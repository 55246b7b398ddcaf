//! Report formatting for category totals and the grand total

use super::EMPTY_MESSAGE;
use crate::models::Money;
use crate::services::CategoryTotal;

/// Format one category total as `category: amount`
pub fn format_category_line(category: &str, total: Money, unit: &str) -> String {
    format!("{}: {}", category, total.format_with_unit(unit))
}

/// Format category totals, one `category: amount` line each, in the given order
pub fn format_category_totals(totals: &[CategoryTotal], unit: &str) -> String {
    if totals.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut output = String::from("Totals by category:\n");
    for total in totals {
        output.push_str(&format_category_line(&total.category, total.total, unit));
        output.push('\n');
    }

    output
}

/// Format the grand total
pub fn format_grand_total(total: Money, unit: &str) -> String {
    format!("Total spent: {}", total.format_with_unit(unit))
}
