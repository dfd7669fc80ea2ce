//! TUI Views module
//!
//! The totals header, expense list and status bar, plus dispatch to the
//! add form and any open dialog.

pub mod expenses;
pub mod header;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::PlannerLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = PlannerLayout::new(frame.area());

    header::render(frame, app, layout.header);
    expenses::render(frame, app, layout.expenses);
    dialogs::add_expense::render(frame, app, layout.form);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Command => dialogs::command::render(frame, app),
        ActiveDialog::EditBudget => dialogs::edit_budget::render(frame, app),
        ActiveDialog::None => {}
    }
}
