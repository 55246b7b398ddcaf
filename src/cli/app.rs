//! Interactive application shell
//!
//! Drives the main/expenses/reports menus and hands user input to the
//! [`ExpenseManager`]. Validation happens here, before the manager is called.

use std::io::{BufRead, Write};

use tracing::debug;

use super::menu::Menu;
use super::prompt::Prompter;
use crate::config::Settings;
use crate::display::{format_category_totals, format_expense_list, format_grand_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseDraft;
use crate::services::ExpenseManager;

/// Whether the user stays in the current menu loop or leaves the program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    Quit,
}

/// The menu-driven expense tracker
pub struct ExpenseTrackerApp<R, W> {
    manager: ExpenseManager,
    settings: Settings,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> ExpenseTrackerApp<R, W> {
    pub fn new(manager: ExpenseManager, settings: Settings, input: R, output: W) -> Self {
        Self {
            manager,
            settings,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user picks Exit or input ends
    ///
    /// A failed save is returned as an error and the expense is not kept.
    pub fn run(&mut self) -> ExpenseResult<()> {
        let greeting = format!("Hello, {}!", self.settings.user_name);
        self.prompter.say(&greeting)?;

        loop {
            let Some(choice) = self.choose(Menu::Main)? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.expenses_flow()?,
                "2" => self.reports_flow()?,
                "3" => Flow::Quit,
                _ => {
                    self.prompter.say("Invalid choice.")?;
                    Flow::Back
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.prompter.say("Goodbye")
    }

    /// Consume the app, returning the manager and the I/O handles
    pub fn into_parts(self) -> (ExpenseManager, R, W) {
        let (input, output) = self.prompter.into_inner();
        (self.manager, input, output)
    }

    fn choose(&mut self, menu: Menu) -> ExpenseResult<Option<String>> {
        let rendered = menu.render();
        self.prompter.say(rendered.trim_end())?;
        self.prompter.ask("Choose: ")
    }

    fn expenses_flow(&mut self) -> ExpenseResult<Flow> {
        loop {
            let Some(choice) = self.choose(Menu::Expenses)? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => {
                    if self.add_expense()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                "2" => self.view_expenses()?,
                "3" => return Ok(Flow::Back),
                _ => self.prompter.say("Invalid choice.")?,
            }
        }
    }

    fn reports_flow(&mut self) -> ExpenseResult<Flow> {
        loop {
            let Some(choice) = self.choose(Menu::Reports)? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => {
                    let totals = self.manager.totals_by_category();
                    let text = format_category_totals(&totals, &self.settings.currency);
                    self.prompter.say(text.trim_end())?;
                }
                "2" => {
                    let text = format_grand_total(self.manager.total_all(), &self.settings.currency);
                    self.prompter.say(&text)?;
                }
                "3" => return Ok(Flow::Back),
                _ => self.prompter.say("Invalid choice.")?,
            }
        }
    }

    fn add_expense(&mut self) -> ExpenseResult<Flow> {
        let amount_prompt = format!("Amount ({}): ", self.settings.currency);
        let Some(amount) = self.prompter.ask_amount(&amount_prompt)? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompter.ask("Category: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(note) = self.prompter.ask("Note: ")? else {
            return Ok(Flow::Quit);
        };

        let draft = ExpenseDraft::new(amount, category, note);
        if let Err(e) = draft.validate() {
            debug!(error = %e, "rejected expense input");
            let reason = match e {
                ExpenseError::Validation(reason) => reason,
                other => other.to_string(),
            };
            self.prompter.say(&format!("Invalid expense data: {}", reason))?;
            return Ok(Flow::Back);
        }

        match self.manager.add(draft.amount, draft.category, draft.note) {
            Ok(_) => self.prompter.say("Expense saved.")?,
            Err(ExpenseError::Validation(reason)) => {
                debug!(%reason, "expense not added");
                self.prompter.say(&format!("Could not add expense: {}", reason))?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Back)
    }

    fn view_expenses(&mut self) -> ExpenseResult<()> {
        let expenses = self.manager.list();
        let text = format_expense_list(&expenses, &self.settings.currency);
        self.prompter.say(text.trim_end())
    }
}
