//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, the add form or the expense
//! list, in that order.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::dialogs;
use super::event::Event;
use crate::models::SortMode;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.focus {
        Focus::Form => {
            dialogs::add_expense::handle_key(app, key);
        }
        Focus::List => handle_list_key(app, key),
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Command => {
            dialogs::command::handle_key(app, key);
        }
        ActiveDialog::EditBudget => {
            dialogs::edit_budget::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys when the expense list has focus
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char(':') => app.open_dialog(ActiveDialog::Command),
        KeyCode::Char('e') | KeyCode::Char('b') => app.open_dialog(ActiveDialog::EditBudget),

        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Tab => {
            app.clear_status();
            app.toggle_focus();
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.store.state().items.len().saturating_sub(1);
        }

        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('1') => app.set_sort_mode(SortMode::Default),
        KeyCode::Char('2') => app.set_sort_mode(SortMode::Asc),
        KeyCode::Char('3') => app.set_sort_mode(SortMode::Desc),

        KeyCode::Esc => app.clear_status(),

        _ => {}
    }
}
