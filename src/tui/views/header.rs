//! Totals header
//!
//! Shows the budget, what is left of it and what has been spent

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;

/// Render the totals header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.store.snapshot();
    let symbol = app.symbol();

    let block = Block::default()
        .title(" My Budget Planner ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let remaining_color = if snapshot.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(vec![
            label("Budget:        "),
            amount(snapshot.total_budget, symbol, Color::Yellow),
            Span::styled("   [e] Edit", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            label("Remaining:     "),
            amount(snapshot.remaining, symbol, remaining_color),
        ]),
        Line::from(vec![
            label("Spent so far:  "),
            amount(snapshot.spent, symbol, Color::White),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Cyan))
}

fn amount(value: Money, symbol: &str, color: Color) -> Span<'static> {
    Span::styled(
        value.format_with_symbol(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
