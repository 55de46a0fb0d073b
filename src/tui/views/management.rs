//! Account Management tab
//!
//! Summary of the selected account and the keys for account-level actions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::format_amount;
use crate::tui::app::App;

use super::{amount_color, content_block};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(account) = &app.panel.state.selected_account else {
        return;
    };
    let panel = &app.panel;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(area);

    let label = Style::default().fg(Color::DarkGray);
    let info = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", panel.t("account_name")), label),
            Span::styled(
                account.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", panel.t("current_balance")), label),
            Span::styled(
                format_amount(account.balance),
                Style::default().fg(amount_color(account.balance.is_negative())),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", panel.t("transactions")), label),
            Span::raw(account.transactions.len().to_string()),
            Span::raw("   "),
            Span::styled(format!("{}: ", panel.t("recurring_plans")), label),
            Span::raw(account.recurring_plans.len().to_string()),
        ]),
        Line::from(""),
        Line::from(vec![
            action("A", panel.t("add_account")),
            action("E", panel.t("edit_account")),
            action("b", panel.t("adjust_balance")),
        ]),
        Line::from(vec![
            action("n", panel.t("account_notes")),
            Span::styled("[D] ", Style::default().fg(Color::Red)),
            Span::styled(panel.t("delete_account").to_string(), Style::default().fg(Color::Red)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(info).block(content_block(app).title(format!(
            " {} ",
            panel.t("account_management")
        ))),
        chunks[0],
    );

    let notes_block = Block::default()
        .title(format!(" {} ", panel.t("account_notes")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let notes = Paragraph::new(account.notes.clone())
        .block(notes_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(notes, chunks[1]);
}

fn action(key: &str, label: &str) -> Span<'static> {
    Span::styled(
        format!("[{}] {}   ", key, label),
        Style::default().fg(Color::White),
    )
}
