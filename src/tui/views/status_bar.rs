//! Status bar view
//!
//! Shows the loading state, the active tab's key hints and global hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::panel::Tab;
use crate::tui::app::{App, FocusedPanel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if app.panel.state.loading {
        spans.push(Span::styled(
            format!(" {} ", app.panel.t("loading")),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    } else if let Some(summary) = app.panel.state.selected_summary() {
        spans.push(Span::styled(
            format!(" {} ", summary.name),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        context_hints(app),
        Style::default().fg(Color::DarkGray),
    ));

    let hints = " q:Quit  ?:Help  r:Reload ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn context_hints(app: &App) -> &'static str {
    if app.prompt.is_some() {
        return "Enter:Apply  Esc:Cancel";
    }
    if app.focused_panel == FocusedPanel::Sidebar {
        return "j/k:Move  Enter:Select  Tab:Table";
    }
    match app.panel.state.active_tab {
        Tab::AllRecords => "a:Add  e:Edit  d:Delete  /:Search  f/u:Dates  c:Clear",
        Tab::Transactions => "a:Add  e:Edit  d:Delete  t:Type  /:Search  f/u:Dates  c:Clear",
        Tab::Plans => "a:Add  e:Edit  d:Delete",
        Tab::AccountManagement => "A:Add  E:Rename  b:Adjust  n:Notes  D:Delete",
    }
}
