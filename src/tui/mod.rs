//! Terminal User Interface module
//!
//! A ratatui front end over [`crate::panel::Panel`]: account sidebar, tabbed
//! record views with a bar chart, and modal dialogs for every form.

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
