//! Transactions tab
//!
//! Real transactions only, newest first, with type, date and search filters.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::{format_date, format_signed_amount};
use crate::tui::app::App;

use super::records::filter_line;
use super::{amount_color, content_block, truncate_string};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let state = &app.panel.state;
    let kind = match state.transaction_kind {
        Some(kind) => app.panel.t(kind.key()),
        None => app.panel.t("all"),
    };
    let range = state.transaction_range;
    frame.render_widget(Paragraph::new(filter_line(app, &range, Some(kind))), chunks[0]);

    render_table(frame, app, chunks[1]);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = content_block(app).title(format!(" {} ", app.panel.t("transactions")));
    let transactions = app.panel.visible_transactions();

    if transactions.is_empty() {
        let text = Paragraph::new(app.panel.t("no_transactions"))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(12), // Type
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Note
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(app.panel.t("date")).style(bold),
        Cell::from(app.panel.t("type")).style(bold),
        Cell::from(app.panel.t("amount")).style(bold),
        Cell::from(app.panel.t("note")).style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let language = app.panel.translator().language();
    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            Row::new(vec![
                Cell::from(format_date(txn.occurred_at(), &txn.timestamp, language)),
                Cell::from(app.panel.t(txn.transaction_type.key())),
                Cell::from(format_signed_amount(txn.amount))
                    .style(Style::default().fg(amount_color(txn.amount.is_negative()))),
                Cell::from(truncate_string(&txn.note, 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));

    frame.render_stateful_widget(table, area, &mut state);
}
