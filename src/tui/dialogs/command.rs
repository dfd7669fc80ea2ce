//! Command line dialog
//!
//! `:` opens a one-line prompt that accepts the same intents as `run`
//! scripts (`budget 25000`, `add Tea 120`, `rm #11002`, `sort desc`).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::PlannerError;
use crate::services::{parse_line, ScriptStep};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

const HINT: &str = "budget <n> | add <name> <cost> | rm <id> | sort <mode> | quit";

/// Render the command line
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 5, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Command ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_area = Rect { height: 1, ..inner };
    let hint_area = Rect {
        y: inner.y + 2,
        height: 1,
        ..inner
    };

    let input_line = Line::from(vec![
        Span::styled(": ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.command_input.value().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("_", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let hint = Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, hint_area);
}

/// Run whatever is in the command line
pub fn execute(app: &mut App) {
    let line = app.command_input.value().trim().to_string();
    app.command_input.clear();
    app.close_dialog();

    if matches!(line.as_str(), "q" | "quit") {
        app.quit();
        return;
    }

    match parse_line(&line, 1) {
        Ok(Some(ScriptStep::Apply(intent))) => {
            let outcome = intent.apply(&mut app.store);
            app.report(outcome, format!("Done: {}", intent));
        }
        Ok(Some(ScriptStep::Show)) | Ok(None) => app.clear_status(),
        Err(PlannerError::Parse { message, .. }) => app.set_status(message),
        Err(e) => app.set_status(e.to_string()),
    }
}

/// Handle key events for the command line
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.command_input.clear();
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            execute(app);
            true
        }
        KeyCode::Char(c) => {
            app.command_input.insert(c);
            true
        }
        KeyCode::Backspace => {
            app.command_input.backspace();
            true
        }
        KeyCode::Left => {
            app.command_input.move_left();
            true
        }
        KeyCode::Right => {
            app.command_input.move_right();
            true
        }
        _ => false,
    }
}
