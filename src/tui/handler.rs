//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, the filter prompt, or the
//! focused panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::panel::{Modal, Tab};

use super::app::{App, FocusedPanel, Prompt};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.panel.state.has_modal() {
        handle_dialog_key(app, key);
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.prompt.is_some() {
        handle_prompt_key(app, key);
        return;
    }

    handle_normal_key(app, key);
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.panel.state.modal.clone() else {
        return;
    };
    match modal {
        Modal::TransactionForm { .. } => dialogs::transaction::handle_key(app, key),
        Modal::PlanForm { .. } => dialogs::plan::handle_key(app, key),
        Modal::AddAccount | Modal::EditAccount => dialogs::account::handle_key(app, key),
        Modal::DeleteAccount => dialogs::delete_account::handle_key(app, key),
        Modal::BalanceAdjust => dialogs::adjustment::handle_key(app, key),
        Modal::AccountNotes => dialogs::notes::handle_key(app, key),
        Modal::ConfirmDeleteTransaction(_) | Modal::ConfirmDeletePlan(_) => {
            dialogs::confirm::handle_key(app, key)
        }
    };
}

/// Handle keys while the filter prompt is open
fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => app.cancel_prompt(),
        code => {
            if app.prompt_input.handle_key(code) {
                app.prompt_edited();
            }
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Esc => {
            app.panel.dismiss_error();
            return;
        }
        KeyCode::Char('r') => {
            app.panel.refresh();
            app.clamp_selection();
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.switch_tab(Tab::ALL[index]);
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_panel_focus();
            return;
        }
        KeyCode::Char('h') | KeyCode::Left if app.focused_panel == FocusedPanel::Main => {
            app.toggle_panel_focus();
            return;
        }
        KeyCode::Char('l') | KeyCode::Right if app.focused_panel == FocusedPanel::Sidebar => {
            app.toggle_panel_focus();
            return;
        }

        // Account-level actions
        KeyCode::Char('A') => {
            app.open_add_account();
            return;
        }
        KeyCode::Char('E') => {
            app.open_edit_account();
            return;
        }
        KeyCode::Char('D') => {
            app.open_delete_account();
            return;
        }
        KeyCode::Char('b') => {
            app.open_adjustment();
            return;
        }
        KeyCode::Char('n') => {
            app.open_notes();
            return;
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => app.select_sidebar_account(),
        _ => {}
    }
}

/// Handle keys when the tab content is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) {
    let tab = app.panel.state.active_tab;
    let filterable = matches!(tab, Tab::AllRecords | Tab::Transactions);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_row = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_row = app.row_count().saturating_sub(1);
        }

        KeyCode::Char('a') => app.open_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_selected(),

        KeyCode::Char('/') if filterable => app.begin_prompt(Prompt::Search),
        KeyCode::Char('f') if filterable => app.begin_prompt(Prompt::StartDate),
        KeyCode::Char('u') if filterable => app.begin_prompt(Prompt::EndDate),
        KeyCode::Char('c') if filterable => app.clear_filters(),
        KeyCode::Char('t') if tab == Tab::Transactions => {
            app.panel.state.cycle_transaction_kind();
            app.selected_row = 0;
        }
        _ => {}
    }
}
