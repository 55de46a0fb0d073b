//! Balance adjustment dialog
//!
//! Posts a signed adjustment transaction and previews the resulting balance.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::format_amount;
use crate::panel::AdjustmentDraft;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{frame_dialog, hints, render_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjustmentField {
    #[default]
    Amount,
    Reason,
}

/// State for the adjustment dialog
#[derive(Debug, Clone, Default)]
pub struct AdjustmentFormState {
    pub focused_field: AdjustmentField,
    pub amount_input: TextInput,
    pub reason_input: TextInput,
}

impl AdjustmentFormState {
    pub fn new() -> Self {
        Self {
            focused_field: AdjustmentField::Amount,
            amount_input: TextInput::new().placeholder("+100 / -50"),
            reason_input: TextInput::new(),
        }
    }

    pub fn draft(&self) -> AdjustmentDraft {
        AdjustmentDraft {
            amount: self.amount_input.value().to_string(),
            reason: self.reason_input.value().to_string(),
        }
    }
}

/// Render the adjustment dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let panel = &app.panel;
    let Some(balance) = panel.state.selected_account.as_ref().map(|a| a.balance) else {
        return;
    };

    let area = centered_rect_fixed(56, 11, frame.area());
    let inner = frame_dialog(frame, area, panel.t("adjust_balance"), Color::Yellow);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current balance
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Reason
            Constraint::Length(1), // New balance
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.adjustment_form;
    let label = Style::default().fg(Color::DarkGray);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{}: ", panel.t("current_balance")), label),
            Span::styled(format_amount(balance), Style::default().fg(Color::White)),
        ])),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(form.amount_input.line(
            panel.t("adjustment_amount"),
            form.focused_field == AdjustmentField::Amount,
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(form.reason_input.line(
            panel.t("adjustment_reason"),
            form.focused_field == AdjustmentField::Reason,
        )),
        chunks[2],
    );

    if let Some(preview) = form.draft().preview(balance) {
        let color = if preview.is_negative() {
            Color::Red
        } else {
            Color::Green
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{}: ", panel.t("new_balance")), label),
                Span::styled(format_amount(preview), Style::default().fg(color)),
            ])),
            chunks[3],
        );
    }

    render_error(frame, app, chunks[5]);
    frame.render_widget(Paragraph::new(hints(app.panel.t("save"), true)), chunks[6]);
}

/// Handle key input for the adjustment dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.adjustment_form;

    match key.code {
        KeyCode::Esc => {
            app.panel.close_modal();
            true
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.focused_field = match form.focused_field {
                AdjustmentField::Amount => AdjustmentField::Reason,
                AdjustmentField::Reason => AdjustmentField::Amount,
            };
            true
        }
        KeyCode::Enter => {
            let draft = form.draft();
            app.panel.adjust_balance(&draft);
            true
        }
        code if !key.modifiers.contains(KeyModifiers::CONTROL) => match form.focused_field {
            AdjustmentField::Amount => form.amount_input.handle_key(code),
            AdjustmentField::Reason => form.reason_input.handle_key(code),
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::forms::INVALID_ADJUSTMENT;
    use crate::tui::app::tests::loaded_app;

    #[test]
    fn test_zero_adjustment_is_rejected() {
        let (mut app, mock) = loaded_app();
        app.open_adjustment();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE));
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(app.panel.state.error.as_deref(), Some(INVALID_ADJUSTMENT));
        assert!(app.panel.state.modal.is_some());
        assert_eq!(mock.requests().len(), 3);
    }
}
