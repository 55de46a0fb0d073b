//! Recurring plan dialog
//!
//! Add or edit a plan. The month field only appears for yearly plans.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Frequency, RecurringPlan};
use crate::panel::{Modal, PlanDraft};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{frame_dialog, hints, render_error};

/// Which field is currently focused in the plan form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanField {
    #[default]
    Title,
    Amount,
    Frequency,
    Day,
    Month,
    Active,
}

impl PlanField {
    /// Next field; `Month` is skipped unless the plan is yearly
    pub fn next(self, yearly: bool) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Frequency,
            Self::Frequency => Self::Day,
            Self::Day if yearly => Self::Month,
            Self::Day | Self::Month => Self::Active,
            Self::Active => Self::Title,
        }
    }

    pub fn prev(self, yearly: bool) -> Self {
        match self {
            Self::Title => Self::Active,
            Self::Amount => Self::Title,
            Self::Frequency => Self::Amount,
            Self::Day => Self::Frequency,
            Self::Month => Self::Day,
            Self::Active if yearly => Self::Month,
            Self::Active => Self::Day,
        }
    }
}

/// State for the plan form dialog
#[derive(Debug, Clone)]
pub struct PlanFormState {
    pub focused_field: PlanField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    pub frequency: Frequency,
    pub day_input: TextInput,
    pub month_input: TextInput,
    pub active: bool,
}

impl Default for PlanFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanFormState {
    /// Monthly on day 1, active
    pub fn new() -> Self {
        Self::from_draft(PlanDraft::default())
    }

    pub fn from_plan(plan: &RecurringPlan) -> Self {
        Self::from_draft(PlanDraft::from_plan(plan))
    }

    fn from_draft(draft: PlanDraft) -> Self {
        Self {
            focused_field: PlanField::Title,
            title_input: TextInput::new().content(draft.title),
            amount_input: TextInput::new().placeholder("-800").content(draft.amount),
            frequency: draft.frequency,
            day_input: TextInput::new().content(draft.day),
            month_input: TextInput::new().content(draft.month),
            active: draft.active,
        }
    }

    pub fn draft(&self) -> PlanDraft {
        PlanDraft {
            title: self.title_input.value().to_string(),
            amount: self.amount_input.value().to_string(),
            frequency: self.frequency,
            day: self.day_input.value().to_string(),
            month: self.month_input.value().to_string(),
            active: self.active,
        }
    }

    pub fn is_yearly(&self) -> bool {
        self.frequency == Frequency::Yearly
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next(self.is_yearly());
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev(self.is_yearly());
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            PlanField::Title => Some(&mut self.title_input),
            PlanField::Amount => Some(&mut self.amount_input),
            PlanField::Day => Some(&mut self.day_input),
            PlanField::Month => Some(&mut self.month_input),
            PlanField::Frequency | PlanField::Active => None,
        }
    }
}

/// Render the plan dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let editing = matches!(
        app.panel.state.modal,
        Some(Modal::PlanForm { editing: Some(_) })
    );
    let title = if editing {
        app.panel.t("edit")
    } else {
        app.panel.t("add_plan")
    };

    let area = centered_rect_fixed(60, 13, frame.area());
    let inner = frame_dialog(frame, area, title, Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Frequency
            Constraint::Length(1), // Day
            Constraint::Length(1), // Month
            Constraint::Length(1), // Active
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.plan_form;
    let panel = &app.panel;
    let focused = form.focused_field;

    frame.render_widget(
        Paragraph::new(form.title_input.line(panel.t("title"), focused == PlanField::Title)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(form.amount_input.line(panel.t("amount"), focused == PlanField::Amount)),
        chunks[1],
    );

    let frequency_line = Line::from(vec![
        Span::styled(
            format!("{}: ", panel.t("frequency")),
            label_style(focused == PlanField::Frequency),
        ),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            panel.t(form.frequency.key()).to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(frequency_line), chunks[2]);

    frame.render_widget(
        Paragraph::new(form.day_input.line(panel.t("day"), focused == PlanField::Day)),
        chunks[3],
    );
    if form.is_yearly() {
        frame.render_widget(
            Paragraph::new(form.month_input.line(panel.t("month"), focused == PlanField::Month)),
            chunks[4],
        );
    }

    let active_value = if form.active { "[x]" } else { "[ ]" };
    let active_line = Line::from(vec![
        Span::styled(
            format!("{}: ", panel.t("active")),
            label_style(focused == PlanField::Active),
        ),
        Span::styled(active_value, Style::default().fg(Color::White)),
        Span::styled(
            if focused == PlanField::Active { " (Space to toggle)" } else { "" },
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(active_line), chunks[5]);

    render_error(frame, app, chunks[7]);
    frame.render_widget(Paragraph::new(hints(app.panel.t("save"), true)), chunks[8]);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

/// Handle key input for the plan dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.plan_form;

    match key.code {
        KeyCode::Esc => {
            app.panel.close_modal();
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            true
        }
        KeyCode::Enter => {
            let draft = form.draft();
            app.panel.save_plan(&draft);
            true
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if form.focused_field == PlanField::Frequency =>
        {
            form.frequency = if key.code == KeyCode::Left {
                form.frequency.prev()
            } else {
                form.frequency.next()
            };
            true
        }
        KeyCode::Char(' ') if form.focused_field == PlanField::Active => {
            form.active = !form.active;
            true
        }
        code if !key.modifiers.contains(KeyModifiers::CONTROL) => match form.focused_input() {
            Some(input) => input.handle_key(code),
            None => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostRequest;
    use crate::models::Money;
    use crate::panel::Tab;
    use crate::tui::app::tests::loaded_app;
    use serde_json::json;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_month_field_only_for_yearly() {
        assert_eq!(PlanField::Day.next(false), PlanField::Active);
        assert_eq!(PlanField::Day.next(true), PlanField::Month);
        assert_eq!(PlanField::Active.prev(false), PlanField::Day);
        assert_eq!(PlanField::Active.prev(true), PlanField::Month);
    }

    #[test]
    fn test_defaults() {
        let form = PlanFormState::new();
        assert_eq!(form.frequency, Frequency::Monthly);
        assert_eq!(form.day_input.value(), "1");
        assert!(form.active);
    }

    #[test]
    fn test_cycle_frequency_and_toggle_active() {
        let (mut app, _mock) = loaded_app();
        app.switch_tab(Tab::Plans);
        app.open_add();

        app.plan_form.focused_field = PlanField::Frequency;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.plan_form.frequency, Frequency::Yearly);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.plan_form.frequency, Frequency::Monthly);

        app.plan_form.focused_field = PlanField::Active;
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.plan_form.active);
    }

    #[test]
    fn test_edit_plan_sends_update() {
        let (mut app, mock) = loaded_app();
        app.switch_tab(Tab::Plans);
        app.open_edit_selected();
        assert_eq!(app.plan_form.title_input.value(), "Rent");

        app.plan_form.focused_field = PlanField::Amount;
        app.plan_form.amount_input.set("-850");

        mock.respond(json!({"success": true}))
            .respond(json!({"account": {"id": "checking", "name": "Checking", "balance": 1180}}))
            .respond(json!({"data": []}));
        press(&mut app, KeyCode::Enter);

        assert!(app.panel.state.modal.is_none());
        assert_eq!(
            mock.requests()[3],
            HostRequest::UpdatePlan {
                account_id: "checking".into(),
                plan_id: "plan_rent".into(),
                title: Some("Rent".into()),
                amount: Some(Money::from_cents(-85_000)),
                frequency: Some(Frequency::Monthly),
                day: Some(1),
                month: None,
                active: Some(true),
            }
        );
    }
}
