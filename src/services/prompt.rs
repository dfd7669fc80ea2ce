//! Synchronous value prompts
//!
//! Editing the budget asks the user for a value. Whatever answers the
//! question implements [`ValuePrompt`]; a cancelled prompt counts as zero
//! and so leaves the budget alone.

use std::io::{BufRead, Write};

use crate::models::coerce_number;
use crate::services::budget::{BudgetStore, Outcome};

/// Question shown when editing the budget
pub const BUDGET_PROMPT: &str = "Enter new budget";

/// Something that can ask the user for a single value
pub trait ValuePrompt {
    /// Ask `message`; `None` means the user cancelled
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Ask for a new budget and apply the answer
pub fn edit_budget(store: &mut BudgetStore, prompt: &mut dyn ValuePrompt) -> Outcome {
    let answer = prompt.prompt(BUDGET_PROMPT);
    let value = answer.as_deref().map(coerce_number).unwrap_or(0.0);
    store.set_budget(value)
}

/// Line-based prompt over any reader/writer pair (stdin/stdout in the CLI)
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> ValuePrompt for LinePrompt<R, W> {
    /// End of input or an I/O error counts as a cancel
    fn prompt(&mut self, message: &str) -> Option<String> {
        write!(self.writer, "{}: ", message).ok()?;
        self.writer.flush().ok()?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::budget::Rejection;
    use std::io::Cursor;

    struct Canned(Option<&'static str>);

    impl ValuePrompt for Canned {
        fn prompt(&mut self, _message: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_edit_budget_applies_answer() {
        let mut store = BudgetStore::seeded();
        let outcome = edit_budget(&mut store, &mut Canned(Some("25000")));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(store.state().total_budget, Money::from_units(25_000));
    }

    #[test]
    fn test_cancelled_prompt_is_a_no_op() {
        let mut store = BudgetStore::seeded();
        let outcome = edit_budget(&mut store, &mut Canned(None));
        assert_eq!(outcome, Outcome::Ignored(Rejection::ZeroBudget));
        assert_eq!(store.state().total_budget, Money::from_units(20_000));
    }

    #[test]
    fn test_garbage_answer_is_a_no_op() {
        let mut store = BudgetStore::seeded();
        let outcome = edit_budget(&mut store, &mut Canned(Some("a lot")));
        assert_eq!(outcome, Outcome::Ignored(Rejection::InvalidBudget));
        assert_eq!(store.state().total_budget, Money::from_units(20_000));
    }

    #[test]
    fn test_line_prompt_reads_one_line() {
        let mut output = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new("750\nignored\n"), &mut output);

        assert_eq!(prompt.prompt(BUDGET_PROMPT).as_deref(), Some("750"));
        drop(prompt);
        assert_eq!(String::from_utf8(output).unwrap(), "Enter new budget: ");
    }

    #[test]
    fn test_line_prompt_eof_is_cancel() {
        let mut prompt = LinePrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.prompt(BUDGET_PROMPT), None);
    }
}
