//! Recurring Plans tab

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::{format_date, format_signed_amount};
use crate::models::{Frequency, RecurringPlan};
use crate::panel::Panel;
use crate::tui::app::App;

use super::{amount_color, content_block, truncate_string};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = content_block(app).title(format!(" {} ", app.panel.t("recurring_plans")));
    let plans = app
        .panel
        .state
        .selected_account
        .as_ref()
        .map(|a| a.recurring_plans.as_slice())
        .unwrap_or_default();

    if plans.is_empty() {
        let text = Paragraph::new(app.panel.t("no_plans"))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(14),    // Title
        Constraint::Length(14), // Amount
        Constraint::Length(18), // Schedule
        Constraint::Length(12), // Next
        Constraint::Length(9),  // Status
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(app.panel.t("title")).style(bold),
        Cell::from(app.panel.t("amount")).style(bold),
        Cell::from(app.panel.t("frequency")).style(bold),
        Cell::from(app.panel.t("next_date")).style(bold),
        Cell::from(app.panel.t("active")).style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let language = app.panel.translator().language();
    let rows: Vec<Row> = plans
        .iter()
        .map(|plan| {
            let next = match &plan.next_date {
                Some(raw) => format_date(plan.next_occurrence(), raw, language),
                None => "—".to_string(),
            };
            let (status, status_color) = if plan.active {
                (app.panel.t("active"), Color::Green)
            } else {
                (app.panel.t("inactive"), Color::DarkGray)
            };

            Row::new(vec![
                Cell::from(truncate_string(&plan.title, 30)),
                Cell::from(format_signed_amount(plan.amount))
                    .style(Style::default().fg(amount_color(plan.amount.is_negative()))),
                Cell::from(schedule(&app.panel, plan)),
                Cell::from(next),
                Cell::from(status).style(Style::default().fg(status_color)),
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

/// "Monthly · 5", "Yearly · 3/14", "Daily"
fn schedule(panel: &Panel, plan: &RecurringPlan) -> String {
    let frequency = panel.t(plan.frequency.key());
    match plan.frequency {
        Frequency::Daily => frequency.to_string(),
        Frequency::Weekly | Frequency::Monthly => format!("{} · {}", frequency, plan.day),
        Frequency::Yearly => format!("{} · {}/{}", frequency, plan.month, plan.day),
    }
}
