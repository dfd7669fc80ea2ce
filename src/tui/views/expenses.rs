//! Expense list view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::summary::EMPTY_MESSAGE;
use crate::tui::app::{App, Focus};

/// Render the expense table in the current sort order
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::List;
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let sort_mode = app.store.state().sort_mode;

    let block = Block::default()
        .title(format!(" Expenses - {} [s] ", sort_mode.label()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items = app.visible_items();
    if items.is_empty() {
        let text = Paragraph::new(EMPTY_MESSAGE)
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.symbol();
    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            let cost_style = if item.cost.is_negative() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(item.id.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(item.name.clone()),
                Cell::from(item.cost.format_with_symbol(symbol)).style(cost_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14), // Id
        Constraint::Min(20),    // Name
        Constraint::Length(16), // Cost
    ];

    let header = Row::new(vec![
        Cell::from("ID").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Cost").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index.min(items.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
