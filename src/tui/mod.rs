//! Terminal User Interface module
//!
//! The interactive planner: a totals header, the expense list, an inline
//! add form and a few modal dialogs, drawn with ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
