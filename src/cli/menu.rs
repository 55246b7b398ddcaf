//! Menu screens

/// The three menu screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Expenses,
    Reports,
}

impl Menu {
    /// Title and numbered options for the screen
    pub fn render(&self) -> String {
        let (title, options): (&str, [&str; 3]) = match self {
            Menu::Main => ("==== Expense Tracker ====", ["Expenses", "Reports", "Exit"]),
            Menu::Expenses => (
                "-- Expenses --",
                ["Add expense", "View all expenses", "Back"],
            ),
            Menu::Reports => (
                "-- Reports --",
                ["Totals by category", "Total spent", "Back"],
            ),
        };

        let mut output = format!("\n{}\n", title);
        for (i, option) in options.iter().enumerate() {
            output.push_str(&format!("{}) {}\n", i + 1, option));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu() {
        assert_eq!(
            Menu::Main.render(),
            "\n==== Expense Tracker ====\n1) Expenses\n2) Reports\n3) Exit\n"
        );
    }

    #[test]
    fn test_sub_menus_end_with_back() {
        assert!(Menu::Expenses.render().ends_with("3) Back\n"));
        assert!(Menu::Reports.render().contains("1) Totals by category"));
    }
}
