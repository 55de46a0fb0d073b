//! Sidebar view
//!
//! Shows the account list with balances

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::format_amount;
use crate::tui::app::{App, FocusedPanel};

use super::{amount_color, truncate_string};

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_accounts(frame, app, chunks[1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.panel.t("panel_title")))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let count = format!("{} {}", app.panel.state.accounts.len(), app.panel.t("accounts"));
    let paragraph = Paragraph::new(count)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

fn render_accounts(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", app.panel.t("accounts")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let state = &app.panel.state;
    if state.accounts.is_empty() {
        let key = if state.loading { "loading" } else { "no_accounts" };
        let text = Paragraph::new(app.panel.t(key))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let selected_id = state.selected_account_id.as_deref();
    let items: Vec<ListItem> = state
        .accounts
        .iter()
        .map(|summary| {
            let name_style = if Some(summary.id.as_str()) == selected_id {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<13}", truncate_string(&summary.name, 13)),
                    name_style,
                ),
                Span::styled(
                    format!("{:>12}", format_amount(summary.balance)),
                    Style::default().fg(amount_color(summary.balance.is_negative())),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    // Outside the sidebar the cursor follows the selected account
    let cursor = if is_focused {
        Some(app.sidebar_index)
    } else {
        state.selected_index()
    };
    let mut list_state = ListState::default();
    list_state.select(cursor);

    frame.render_stateful_widget(list, area, &mut list_state);
}
