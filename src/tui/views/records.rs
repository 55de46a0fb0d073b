//! All Records tab
//!
//! Filter bar, income/expense chart, and the merged transaction and plan
//! list.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::{format_date, format_signed_amount};
use crate::records::DateRange;
use crate::tui::app::{App, Prompt};
use crate::tui::layout::RecordsLayout;

use super::{amount_color, chart, content_block, truncate_string};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = RecordsLayout::new(area);

    let range = app.panel.state.records_range;
    frame.render_widget(Paragraph::new(filter_line(app, &range, None)), layout.filters);
    chart::render(frame, app, layout.chart);
    render_table(frame, app, layout.table);
}

/// Date window and search text, or the open prompt in its place
pub(super) fn filter_line(app: &App, range: &DateRange, kind: Option<&str>) -> Line<'static> {
    let panel = &app.panel;
    if let Some(prompt) = app.prompt {
        let label = match prompt {
            Prompt::Search => panel.t("search"),
            Prompt::StartDate => panel.t("start_date"),
            Prompt::EndDate => panel.t("end_date"),
        };
        return app.prompt_input.line(label, true);
    }

    let date_text = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string())
    };
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(kind) = kind {
        spans.push(Span::styled(format!("{}: ", panel.t("type")), label_style));
        spans.push(Span::styled(kind.to_string(), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("  "));
    }
    spans.extend([
        Span::styled(format!("{}: ", panel.t("start_date")), label_style),
        Span::styled(date_text(range.start), value_style),
        Span::raw("  "),
        Span::styled(format!("{}: ", panel.t("end_date")), label_style),
        Span::styled(date_text(range.end), value_style),
        Span::raw("  "),
        Span::styled(format!("{}: ", panel.t("search")), label_style),
        Span::styled(panel.state.search_query.clone(), value_style),
    ]);
    Line::from(spans)
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = content_block(app).title(format!(" {} ", app.panel.t("all_records")));
    let records = app.panel.records(Utc::now());

    if records.is_empty() {
        let text = Paragraph::new(app.panel.t("no_transactions"))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(22), // Type
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Note / title
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
    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            let type_style = if record.is_plan() {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(format_date(record.occurred_at, &record.timestamp, language)),
                Cell::from(truncate_string(&record.display_type, 22)).style(type_style),
                Cell::from(format_signed_amount(record.amount))
                    .style(Style::default().fg(amount_color(record.amount.is_negative()))),
                Cell::from(truncate_string(&record.label, 40)),
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
