//! Dialog modules for the TUI
//!
//! One modal per form. Each dialog owns its form state (if any), renders
//! itself centered over the main view, and routes its own keys.

pub mod account;
pub mod adjustment;
pub mod confirm;
pub mod delete_account;
pub mod help;
pub mod notes;
pub mod plan;
pub mod transaction;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;

/// Clear `area` and draw the dialog frame; returns the inner content area
pub(crate) fn frame_dialog(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(block, area);

    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}

/// The banner text, shown inside the open dialog in red
pub(crate) fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = &app.panel.state.error {
        let line = Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// "[Tab] Next  [Enter] Save  [Esc] Cancel"
pub(crate) fn hints(save_label: &str, with_tab: bool) -> Line<'static> {
    let mut spans = Vec::new();
    if with_tab {
        spans.push(Span::styled("[Tab]", Style::default().fg(Color::White)));
        spans.push(Span::raw(" Next  "));
    }
    spans.extend([
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", save_label)),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    Line::from(spans)
}
