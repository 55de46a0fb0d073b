//! Income/expense bar chart for the selected account

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::{ChartScale, Money};
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = &app.panel;
    let block = Block::default()
        .title(format!(" {} ", panel.t("chart")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(message) = &panel.state.chart_error {
        let text = Paragraph::new(message.clone())
            .block(block)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(text, area);
        return;
    }

    let points = &panel.state.chart_data;
    if points.is_empty() {
        let text = Paragraph::new(panel.t("no_data"))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Borders, the value line and the label line
    let ceiling = u64::from(area.height.saturating_sub(4)).max(1);
    let scale = ChartScale::new(points, ceiling as f64);

    let mut chart = BarChart::default()
        .block(block.title_bottom(Line::from(vec![
            Span::styled(
                format!(" ■ {} ", panel.t("income")),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!(" ■ {} ", panel.t("expenses")),
                Style::default().fg(Color::Red),
            ),
        ])))
        .bar_width(6)
        .bar_gap(1)
        .group_gap(3)
        .max(ceiling);

    for point in points {
        let bars = [
            bar(&scale, point.income, Color::Green),
            bar(&scale, point.expenses, Color::Red),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(point.month.clone()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

fn bar(scale: &ChartScale, value: Money, color: Color) -> Bar<'static> {
    let height = scale.height(value).max(0.0).round() as u64;
    Bar::default()
        .value(height)
        .text_value(compact_amount(value))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

/// Short bar caption: "850", "1.2k", "15k"
fn compact_amount(value: Money) -> String {
    let dollars = value.cents().unsigned_abs() / 100;
    match dollars {
        0..=999 => dollars.to_string(),
        1_000..=9_999 => format!("{:.1}k", dollars as f64 / 1000.0),
        _ => format!("{}k", dollars / 1000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChartDataPoint;

    #[test]
    fn test_compact_amount() {
        assert_eq!(compact_amount(Money::from_cents(85_000)), "850");
        assert_eq!(compact_amount(Money::from_cents(123_456)), "1.2k");
        assert_eq!(compact_amount(Money::from_cents(1_500_000)), "15k");
        assert_eq!(compact_amount(Money::from_cents(i64::MIN)), "92233720368547k");
    }

    #[test]
    fn test_largest_bar_fills_ceiling() {
        let points = vec![ChartDataPoint {
            month: "2024-01".into(),
            income: Money::from_cents(300_000),
            expenses: Money::from_cents(150_000),
        }];
        let scale = ChartScale::new(&points, 6.0);
        assert_eq!(scale.height(points[0].income).round() as u64, 6);
        assert_eq!(scale.height(points[0].expenses).round() as u64, 3);
    }
}
