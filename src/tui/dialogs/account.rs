//! Account dialog
//!
//! Add an account (name and opening balance) or rename the selected one.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    widgets::Paragraph,
    Frame,
};

use crate::panel::{AccountDraft, Modal};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{frame_dialog, hints, render_error};

/// Which field is currently focused in the account form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountField {
    #[default]
    Name,
    InitialBalance,
}

/// State for the account form dialog
#[derive(Debug, Clone, Default)]
pub struct AccountFormState {
    pub focused_field: AccountField,
    pub name_input: TextInput,
    pub balance_input: TextInput,
}

impl AccountFormState {
    pub fn new() -> Self {
        Self {
            focused_field: AccountField::Name,
            name_input: TextInput::new(),
            balance_input: TextInput::new().placeholder("0.00"),
        }
    }

    pub fn for_rename(name: &str) -> Self {
        Self {
            name_input: TextInput::new().content(name),
            ..Self::new()
        }
    }

    pub fn draft(&self) -> AccountDraft {
        AccountDraft {
            name: self.name_input.value().to_string(),
            initial_balance: self.balance_input.value().to_string(),
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            AccountField::Name => &mut self.name_input,
            AccountField::InitialBalance => &mut self.balance_input,
        }
    }
}

fn is_rename(app: &App) -> bool {
    matches!(app.panel.state.modal, Some(Modal::EditAccount))
}

/// Render the account dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let rename = is_rename(app);
    let title = if rename {
        app.panel.t("edit_account")
    } else {
        app.panel.t("add_account")
    };

    let area = centered_rect_fixed(56, 9, frame.area());
    let inner = frame_dialog(frame, area, title, Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Initial balance
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.account_form;
    frame.render_widget(
        Paragraph::new(form.name_input.line(
            app.panel.t("account_name"),
            form.focused_field == AccountField::Name,
        )),
        chunks[0],
    );
    if !rename {
        frame.render_widget(
            Paragraph::new(form.balance_input.line(
                app.panel.t("initial_balance"),
                form.focused_field == AccountField::InitialBalance,
            )),
            chunks[1],
        );
    }

    let save = if rename {
        app.panel.t("save")
    } else {
        app.panel.t("create")
    };
    render_error(frame, app, chunks[3]);
    frame.render_widget(Paragraph::new(hints(save, !rename)), chunks[4]);
}

/// Handle key input for the account dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let rename = is_rename(app);
    let form = &mut app.account_form;

    match key.code {
        KeyCode::Esc => {
            app.panel.close_modal();
            true
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            if !rename {
                form.focused_field = match form.focused_field {
                    AccountField::Name => AccountField::InitialBalance,
                    AccountField::InitialBalance => AccountField::Name,
                };
            }
            true
        }
        KeyCode::Enter => {
            let draft = form.draft();
            if rename {
                app.panel.rename_account(&draft);
            } else if app.panel.create_account(&draft) {
                app.sync_sidebar();
                app.selected_row = 0;
            }
            true
        }
        code if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.focused_input().handle_key(code)
        }
        _ => false,
    }
}
