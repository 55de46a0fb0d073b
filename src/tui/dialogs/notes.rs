//! Account notes dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

use super::{frame_dialog, hints, render_error};

/// Render the notes dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(70, 7, frame.area());
    let inner = frame_dialog(frame, area, app.panel.t("account_notes"), Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Notes
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(app.notes_input.line(app.panel.t("note"), true)),
        chunks[0],
    );
    render_error(frame, app, chunks[2]);
    frame.render_widget(Paragraph::new(hints(app.panel.t("save"), false)), chunks[3]);
}

/// Handle key input for the notes dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.panel.close_modal();
            true
        }
        KeyCode::Enter => {
            app.panel.save_notes();
            true
        }
        code if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let handled = app.notes_input.handle_key(code);
            app.panel.state.notes_draft = app.notes_input.value().to_string();
            handled
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostRequest;
    use crate::tui::app::tests::loaded_app;
    use serde_json::json;

    #[test]
    fn test_edit_and_save_notes() {
        let (mut app, mock) = loaded_app();
        app.open_notes();
        assert_eq!(app.notes_input.value(), "main");

        for c in " account".chars() {
            handle_key(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(app.panel.state.notes_draft, "main account");

        mock.respond(json!({"success": true}))
            .respond(json!({"account": {"id": "checking", "name": "Checking", "balance": 1180, "notes": "main account"}}))
            .respond(json!({"data": []}));
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(app.panel.state.modal.is_none());
        assert_eq!(
            mock.requests()[3],
            HostRequest::UpdateAccount {
                account_id: "checking".into(),
                name: None,
                notes: Some("main account".into()),
            }
        );
    }
}
