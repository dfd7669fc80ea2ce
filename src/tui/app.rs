//! Application state for the TUI
//!
//! The App struct owns the budget store and all UI state needed for
//! rendering and handling events.

use crate::config::settings::Settings;
use crate::models::{ExpenseId, ExpenseItem, SortMode};
use crate::services::{BudgetStore, Outcome};

use super::dialogs::add_expense::AddExpenseForm;
use super::dialogs::edit_budget::EditBudgetState;
use super::widgets::TextInput;

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The expense list
    #[default]
    List,
    /// The add-expense form
    Form,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    EditBudget,
    Command,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The planner state
    pub store: BudgetStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel has focus
    pub focus: Focus,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expense list (display order)
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-expense form
    pub add_form: AddExpenseForm,

    /// Edit budget prompt
    pub edit_budget_state: EditBudgetState,

    /// Command line input
    pub command_input: TextInput,
}

impl<'a> App<'a> {
    /// Create a new App instance over `store`
    pub fn new(store: BudgetStore, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            add_form: AddExpenseForm::new(),
            edit_budget_state: EditBudgetState::new(),
            command_input: TextInput::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show what an operation did in the status bar
    pub fn report(&mut self, outcome: Outcome, success: impl Into<String>) {
        match outcome {
            Outcome::Applied => self.set_status(success),
            Outcome::Ignored(reason) => self.set_status(format!("Ignored: {}", reason)),
        }
        self.clamp_selection();
    }

    /// Currency symbol for amounts
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Items in the order they are displayed
    pub fn visible_items(&self) -> Vec<ExpenseItem> {
        self.store.sorted_view(self.store.state().sort_mode)
    }

    /// Id of the highlighted item
    pub fn selected_id(&self) -> Option<ExpenseId> {
        self.visible_items()
            .get(self.selected_index)
            .map(|item| item.id)
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::EditBudget => self.edit_budget_state.reset(),
            ActiveDialog::Command => self.command_input.clear(),
            ActiveDialog::Help | ActiveDialog::None => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.store.state().items.len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.store.state().items.len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Delete the highlighted expense
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.set_status("Nothing to delete");
            return;
        };
        let outcome = self.store.remove_item(id);
        self.report(outcome, format!("Deleted {}", id));
    }

    /// Switch to a specific ordering
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        let outcome = self.store.set_sort_mode(mode);
        self.selected_index = 0;
        self.report(outcome, format!("Sorted: {}", mode.label()));
    }

    /// Advance to the next ordering
    pub fn cycle_sort(&mut self) {
        let next = self.store.state().sort_mode.cycle();
        self.set_sort_mode(next);
    }

    /// Toggle focus between the list and the add form
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List => Focus::Form,
            Focus::Form => Focus::List,
        };
    }
}
