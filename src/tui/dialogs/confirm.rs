//! Confirmation dialog
//!
//! Yes/no confirmation before deleting a transaction or a plan

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::panel::Modal;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(50, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", app.panel.t("delete")))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.panel.t("confirm_delete"),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];
    if let Some(error) = &app.panel.state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key input for the confirmation dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            match app.panel.state.modal.clone() {
                Some(Modal::ConfirmDeleteTransaction(id)) => {
                    app.panel.delete_transaction(&id);
                }
                Some(Modal::ConfirmDeletePlan(id)) => {
                    app.panel.delete_plan(&id);
                }
                _ => {}
            }
            app.clamp_selection();
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.panel.close_modal();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostRequest;
    use crate::panel::Tab;
    use crate::tui::app::tests::loaded_app;
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    #[test]
    fn test_decline_sends_nothing() {
        let (mut app, mock) = loaded_app();
        app.switch_tab(Tab::Transactions);
        app.open_delete_selected();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));

        assert!(app.panel.state.modal.is_none());
        assert_eq!(mock.requests().len(), 3);
    }

    #[test]
    fn test_confirm_deletes_transaction() {
        let (mut app, mock) = loaded_app();
        app.switch_tab(Tab::Transactions);
        app.open_delete_selected();

        mock.respond(json!({"success": true}))
            .respond(json!({"account": {"id": "checking", "name": "Checking", "balance": 1200}}))
            .respond(json!({"data": []}));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));

        assert!(app.panel.state.modal.is_none());
        assert_eq!(
            mock.requests()[3],
            HostRequest::DeleteTransaction {
                account_id: "checking".into(),
                transaction_id: "tx_coffee".into(),
            }
        );
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_failed_delete_keeps_dialog() {
        let (mut app, mock) = loaded_app();
        app.switch_tab(Tab::Plans);
        app.open_delete_selected();

        mock.fail("not_found", "Plan not found");
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(
            app.panel.state.modal,
            Some(Modal::ConfirmDeletePlan("plan_rent".into()))
        );
        assert_eq!(app.panel.state.error.as_deref(), Some("Plan not found"));
    }
}
