//! Blocking line prompts over any reader/writer pair

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)
            .map_err(|e| ExpenseError::Io(format!("Failed to write output: {}", e)))
    }

    /// Print `prompt` and read one trimmed line; `None` once input is exhausted
    pub fn ask(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)
            .and_then(|_| self.output.flush())
            .map_err(|e| ExpenseError::Io(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ExpenseError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Ask for an amount until the answer parses; `None` once input is exhausted
    ///
    /// Each rejected answer prints the reason followed by ", try again."
    pub fn ask_amount(&mut self, prompt: &str) -> ExpenseResult<Option<Money>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };

            match Money::parse(&answer) {
                Ok(amount) => return Ok(Some(amount)),
                Err(ExpenseError::Input(reason)) => {
                    debug!(%reason, "rejected amount input");
                    self.say(&format!("{}, try again.", reason))?
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn test_ask_trims() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.ask("Name: ").unwrap(), Some("hello".to_string()));
        assert_eq!(output(p), "Name: ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut p = prompter("");
        assert_eq!(p.ask("Name: ").unwrap(), None);
    }

    #[test]
    fn test_ask_amount_reprompts() {
        let mut p = prompter("abc\n\n12.5\n");
        assert_eq!(p.ask_amount("Amount: ").unwrap(), Some(Money::from_cents(1250)));
        assert_eq!(
            output(p),
            "Amount: Invalid number, try again.\n\
             Amount: Invalid number, try again.\n\
             Amount: "
        );
    }

    #[test]
    fn test_ask_amount_explains_precision_and_range() {
        let mut p = prompter("0.001\n90000000000000000\n0.01\n");
        assert_eq!(p.ask_amount("Amount: ").unwrap(), Some(Money::from_cents(1)));
        assert_eq!(
            output(p),
            "Amount: Invalid number: use at most two decimal places, try again.\n\
             Amount: Invalid number: amount too large, try again.\n\
             Amount: "
        );
    }

    #[test]
    fn test_ask_amount_gives_up_at_end_of_input() {
        let mut p = prompter("nope\n");
        assert_eq!(p.ask_amount("Amount: ").unwrap(), None);
    }
}
