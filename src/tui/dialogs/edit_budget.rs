//! Edit budget dialog
//!
//! Modal prompt for a new total budget. The dialog answers the
//! [`ValuePrompt`] question: Enter hands back the typed text and Esc
//! cancels, which leaves the budget unchanged.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::services::prompt::BUDGET_PROMPT;
use crate::services::{edit_budget, BudgetStore, Outcome, ValuePrompt};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the edit budget dialog
#[derive(Debug, Clone, Default)]
pub struct EditBudgetState {
    /// What the user is typing
    pub input: TextInput,
    /// Answer waiting to be collected by the prompt
    answer: Option<String>,
}

impl EditBudgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Accept the typed text and apply it as the new budget
    pub fn submit(&mut self, store: &mut BudgetStore) -> Outcome {
        self.answer = Some(self.input.value().to_string());
        edit_budget(store, self)
    }

    /// Dismiss without an answer
    pub fn cancel(&mut self, store: &mut BudgetStore) -> Outcome {
        self.answer = None;
        edit_budget(store, self)
    }
}

impl ValuePrompt for EditBudgetState {
    fn prompt(&mut self, _message: &str) -> Option<String> {
        self.answer.take()
    }
}

/// Render the edit budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current budget
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let current = app.store.state().total_budget.format_with_symbol(app.symbol());
    let current_line = Line::from(vec![
        Span::styled("Current: ", Style::default().fg(Color::Yellow)),
        Span::styled(current, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[0]);

    let input = app
        .edit_budget_state
        .input
        .clone()
        .label(BUDGET_PROMPT)
        .focused(true);
    frame.render_widget(&input, chunks[2]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[4]);
}

/// Handle key events for the edit budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            let outcome = app.edit_budget_state.cancel(&mut app.store);
            finish(app, outcome);
            true
        }

        KeyCode::Enter => {
            let outcome = app.edit_budget_state.submit(&mut app.store);
            finish(app, outcome);
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_budget_state.input.clear();
            true
        }

        KeyCode::Char(c) => {
            app.edit_budget_state.input.insert(c);
            true
        }

        KeyCode::Backspace => {
            app.edit_budget_state.input.backspace();
            true
        }

        KeyCode::Left => {
            app.edit_budget_state.input.move_left();
            true
        }

        KeyCode::Right => {
            app.edit_budget_state.input.move_right();
            true
        }

        _ => false,
    }
}

fn finish(app: &mut App, outcome: Outcome) {
    match outcome {
        Outcome::Applied => {
            let budget = app
                .store
                .state()
                .total_budget
                .format_with_symbol(app.symbol());
            app.set_status(format!("Budget set to {}", budget));
        }
        Outcome::Ignored(reason) => app.set_status(format!("Budget unchanged: {}", reason)),
    }
    app.edit_budget_state.reset();
    app.close_dialog();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::tui::app::ActiveDialog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_sets_budget() {
        let settings = Settings::default();
        let mut app = App::new(BudgetStore::seeded(), &settings);
        app.open_dialog(ActiveDialog::EditBudget);

        type_text(&mut app, "25000");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.store.state().total_budget, Money::from_units(25_000));
        assert_eq!(app.store.compute_remaining(), Money::from_units(22_000));
        assert!(!app.has_dialog());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Budget set to ৳ 25000")
        );
    }

    #[test]
    fn test_escape_leaves_budget_alone() {
        let settings = Settings::default();
        let mut app = App::new(BudgetStore::seeded(), &settings);
        app.open_dialog(ActiveDialog::EditBudget);

        type_text(&mut app, "999");
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.store.state().total_budget, Money::from_units(20_000));
        assert!(!app.has_dialog());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Budget unchanged: budget cannot be zero")
        );
    }

    #[test]
    fn test_non_numeric_answer_is_ignored() {
        let settings = Settings::default();
        let mut app = App::new(BudgetStore::seeded(), &settings);
        app.open_dialog(ActiveDialog::EditBudget);

        type_text(&mut app, "lots");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.store.state().total_budget, Money::from_units(20_000));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Budget unchanged: budget is not a number")
        );
    }

    #[test]
    fn test_prompt_answers_once() {
        let mut state = EditBudgetState::new();
        state.answer = Some("10".into());
        assert_eq!(state.prompt(BUDGET_PROMPT).as_deref(), Some("10"));
        assert_eq!(state.prompt(BUDGET_PROMPT), None);
    }
}
