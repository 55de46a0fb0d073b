//! Delete account dialog
//!
//! The account name has to be typed back exactly before Enter deletes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

use super::{frame_dialog, hints, render_error};

/// Render the delete account dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let panel = &app.panel;
    let name = panel
        .state
        .selected_account
        .as_ref()
        .map(|a| a.name.clone())
        .unwrap_or_default();

    let area = centered_rect_fixed(60, 12, frame.area());
    let inner = frame_dialog(frame, area, panel.t("delete_account"), Color::Red);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Warning
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let warning = Paragraph::new(panel.t("delete_warning"))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(warning, chunks[0]);

    let prompt = Line::from(vec![
        Span::raw(format!("{} ", panel.t("type_to_confirm"))),
        Span::styled(name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(prompt), chunks[2]);

    let input_line = app.delete_input.line(">", true);
    frame.render_widget(Paragraph::new(input_line), chunks[3]);

    render_error(frame, app, chunks[5]);

    let hint = if app.panel.delete_enabled() {
        hints(app.panel.t("delete"), false)
    } else {
        Line::from(Span::styled(
            "[Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(hint), chunks[6]);
}

/// Handle key input for the delete account dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.delete_input.clear();
            app.panel.close_modal();
            true
        }
        KeyCode::Enter => {
            if app.panel.delete_account() {
                app.delete_input.clear();
                app.sync_sidebar();
                app.selected_row = 0;
            }
            true
        }
        code if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let handled = app.delete_input.handle_key(code);
            app.panel.state.delete_confirm_text = app.delete_input.value().to_string();
            handled
        }
        _ => false,
    }
}
