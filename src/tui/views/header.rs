//! Account header and tab strip

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::i18n::{format_amount, format_date, format_signed_amount};
use crate::panel::Tab;
use crate::tui::app::App;

use super::{amount_color, truncate_string};

/// Name, balance and the last transaction of the selected account
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = &app.panel;
    let state = &panel.state;

    let title = match state.selected_summary() {
        Some(summary) => format!(" {} ", summary.name),
        None => format!(" {} ", panel.t("panel_title")),
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(account) = &state.selected_account else {
        let text = if state.loading {
            panel.t("loading")
        } else {
            panel.t("select_account")
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}: ", panel.t("balance")),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format_amount(account.balance),
            Style::default()
                .fg(amount_color(account.balance.is_negative()))
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(last) = account.last_transaction() {
        let language = panel.translator().language();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", panel.t("last_transaction")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format_signed_amount(last.amount),
                Style::default().fg(amount_color(last.amount.is_negative())),
            ),
            Span::raw("  "),
            Span::styled(
                truncate_string(&last.note, 30),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled(
                format_date(last.occurred_at(), &last.timestamp, language),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Tab strip with number hints
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                Span::raw(app.panel.t(tab.label_key())),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.panel.state.active_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
