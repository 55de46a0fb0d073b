//! Help dialog
//!
//! Shows keyboard shortcuts for the active tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::panel::Tab;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("1-4", "Switch tab"),
        key_line("Tab", "Switch panel focus"),
        key_line("h/l", "Focus accounts / table"),
        key_line("j/k", "Move selection up/down"),
        key_line("Enter", "Open the highlighted account"),
        key_line("r", "Reload from the host"),
        key_line("Esc", "Dismiss the error banner"),
        key_line("A / E / D", "Add / rename / delete account"),
        key_line("b", "Adjust balance"),
        key_line("n", "Edit account notes"),
        Line::from(""),
    ];

    let tab = app.panel.state.active_tab;
    lines.push(section(app.panel.t(tab.label_key())));
    lines.push(Line::from(""));
    match tab {
        Tab::AllRecords | Tab::Transactions => {
            lines.push(key_line("a", "Add transaction"));
            lines.push(key_line("e", "Edit highlighted row"));
            lines.push(key_line("d", "Delete highlighted row"));
            lines.push(key_line("/", "Search"));
            lines.push(key_line("f / u", "From / until date"));
            lines.push(key_line("c", "Clear filters"));
            if tab == Tab::Transactions {
                lines.push(key_line("t", "Cycle type filter"));
            }
        }
        Tab::Plans => {
            lines.push(key_line("a", "Add plan"));
            lines.push(key_line("e", "Edit plan"));
            lines.push(key_line("d", "Delete plan"));
        }
        Tab::AccountManagement => {
            lines.push(key_line("A", "Add account"));
            lines.push(key_line("E", "Rename account"));
            lines.push(key_line("D", "Delete account"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
