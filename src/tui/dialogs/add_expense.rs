//! Add expense form
//!
//! Name and cost fields shown under the expense list. The cost field only
//! accepts characters that can appear in a number; its text is coerced on
//! submit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::coerce_number;
use crate::services::{BudgetStore, Outcome};
use crate::tui::app::{App, Focus};
use crate::tui::widgets::TextInput;

/// Which field of the form has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Cost,
}

/// State of the add expense form
#[derive(Debug, Clone)]
pub struct AddExpenseForm {
    pub name: TextInput,
    pub cost: TextInput,
    pub field: FormField,
    pub error_message: Option<String>,
}

impl Default for AddExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddExpenseForm {
    pub fn new() -> Self {
        Self {
            name: TextInput::new().label("Name").placeholder("Expense name"),
            cost: TextInput::new().label("Cost").placeholder("Cost"),
            field: FormField::Name,
            error_message: None,
        }
    }

    /// Clear both fields and return to the name field
    pub fn reset(&mut self) {
        self.name.clear();
        self.cost.clear();
        self.field = FormField::Name;
        self.error_message = None;
    }

    /// Switch between the name and cost fields
    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::Cost,
            FormField::Cost => FormField::Name,
        };
    }

    /// The field that receives typing
    pub fn active_input(&mut self) -> &mut TextInput {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Cost => &mut self.cost,
        }
    }

    /// Type a character into the active field
    pub fn insert_char(&mut self, c: char) {
        if self.field == FormField::Cost
            && !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        {
            return;
        }
        self.active_input().insert(c);
        self.error_message = None;
    }

    /// Submit the form to the store; the fields are cleared on success
    pub fn submit(&mut self, store: &mut BudgetStore) -> Outcome {
        let outcome = store.add_item(self.name.value(), coerce_number(self.cost.value()));
        match outcome {
            Outcome::Applied => self.reset(),
            Outcome::Ignored(reason) => self.error_message = Some(reason.to_string()),
        }
        outcome
    }
}

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.add_form;
    let focused = app.focus == Focus::Form;
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    let name = form
        .name
        .clone()
        .focused(focused && form.field == FormField::Name);
    let cost = form
        .cost
        .clone()
        .focused(focused && form.field == FormField::Cost);
    frame.render_widget(&name, fields[0]);
    frame.render_widget(&cost, fields[1]);

    let hint = if let Some(ref error) = form.error_message {
        Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
    } else if focused {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Add  "),
            Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
            Span::raw(" Next field  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Back to list"),
        ])
    } else {
        Line::from(Span::styled(
            "[a] Add an expense",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(hint), rows[1]);
}

/// Handle key events while the form has focus
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.add_form.error_message = None;
            app.focus = Focus::List;
            true
        }
        KeyCode::Enter => {
            let outcome = app.add_form.submit(&mut app.store);
            if outcome.is_applied() {
                app.selected_index = 0;
            }
            app.report(outcome, "Expense added");
            true
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.add_form.next_field();
            true
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.add_form.active_input().clear();
            true
        }
        KeyCode::Char(c) => {
            app.add_form.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            app.add_form.active_input().backspace();
            true
        }
        KeyCode::Delete => {
            app.add_form.active_input().delete();
            true
        }
        KeyCode::Left => {
            app.add_form.active_input().move_left();
            true
        }
        KeyCode::Right => {
            app.add_form.active_input().move_right();
            true
        }
        KeyCode::Home => {
            app.add_form.active_input().move_start();
            true
        }
        KeyCode::End => {
            app.add_form.active_input().move_end();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::Rejection;

    fn fill(form: &mut AddExpenseForm, name: &str, cost: &str) {
        for c in name.chars() {
            form.insert_char(c);
        }
        form.next_field();
        for c in cost.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn test_cost_field_ignores_letters() {
        let mut form = AddExpenseForm::new();
        form.next_field();
        for c in "12a.5x".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.cost.value(), "12.5");
    }

    #[test]
    fn test_submit_adds_and_clears() {
        let mut store = BudgetStore::seeded();
        let mut form = AddExpenseForm::new();
        fill(&mut form, "Coffee", "120");

        assert_eq!(form.submit(&mut store), Outcome::Applied);
        assert_eq!(store.state().items[0].name, "Coffee");
        assert_eq!(store.compute_spent(), Money::from_units(3120));
        assert_eq!(form.name.value(), "");
        assert_eq!(form.cost.value(), "");
        assert_eq!(form.field, FormField::Name);
    }

    #[test]
    fn test_zero_cost_keeps_form_and_shows_error() {
        let mut store = BudgetStore::seeded();
        let mut form = AddExpenseForm::new();
        fill(&mut form, "Coffee", "0");

        assert_eq!(
            form.submit(&mut store),
            Outcome::Ignored(Rejection::ZeroCost)
        );
        assert_eq!(store.state().items.len(), 3);
        assert_eq!(form.name.value(), "Coffee");
        assert_eq!(form.error_message.as_deref(), Some("cost cannot be zero"));
    }

    #[test]
    fn test_empty_cost_is_rejected() {
        let mut store = BudgetStore::seeded();
        let mut form = AddExpenseForm::new();
        fill(&mut form, "Coffee", "");

        assert!(!form.submit(&mut store).is_applied());
        assert_eq!(store.state().items.len(), 3);
    }
}
