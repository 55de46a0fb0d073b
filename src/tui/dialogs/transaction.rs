//! Transaction entry dialog
//!
//! Add or edit a transaction: amount and note.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    widgets::Paragraph,
    Frame,
};

use crate::models::Transaction;
use crate::panel::{Modal, TransactionDraft};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{frame_dialog, hints, render_error};

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Amount,
    Note,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Note,
            Self::Note => Self::Amount,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone, Default)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub amount_input: TextInput,
    pub note_input: TextInput,
}

impl TransactionFormState {
    pub fn new() -> Self {
        Self {
            focused_field: TransactionField::Amount,
            amount_input: TextInput::new().placeholder("-12.50"),
            note_input: TextInput::new(),
        }
    }

    /// Pre-populate from an existing transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        let draft = TransactionDraft::from_transaction(txn);
        Self {
            focused_field: TransactionField::Amount,
            amount_input: TextInput::new().content(draft.amount),
            note_input: TextInput::new().content(draft.note),
        }
    }

    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft {
            amount: self.amount_input.value().to_string(),
            note: self.note_input.value().to_string(),
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            TransactionField::Amount => &mut self.amount_input,
            TransactionField::Note => &mut self.note_input,
        }
    }
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let editing = matches!(
        app.panel.state.modal,
        Some(Modal::TransactionForm { editing: Some(_) })
    );
    let title = if editing {
        app.panel.t("edit")
    } else {
        app.panel.t("add_transaction")
    };

    let area = centered_rect_fixed(60, 9, frame.area());
    let inner = frame_dialog(frame, area, title, Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;
    let focused = form.focused_field;
    frame.render_widget(
        Paragraph::new(
            form.amount_input
                .line(app.panel.t("amount"), focused == TransactionField::Amount),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            form.note_input
                .line(app.panel.t("note"), focused == TransactionField::Note),
        ),
        chunks[1],
    );

    render_error(frame, app, chunks[3]);
    frame.render_widget(Paragraph::new(hints(app.panel.t("save"), true)), chunks[4]);
}

/// Handle key input for the transaction dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => {
            app.panel.close_modal();
            true
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            form.focused_field = form.focused_field.next();
            true
        }
        KeyCode::Enter => {
            let draft = form.draft();
            app.panel.save_transaction(&draft);
            true
        }
        code if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.focused_input().handle_key(code)
        }
        _ => false,
    }
}
