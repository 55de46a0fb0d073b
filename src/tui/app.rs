//! Application state for the TUI
//!
//! `App` wraps the panel view-model with what only the terminal needs:
//! focus, list cursors, the inline filter prompt, and dialog form states.

use chrono::Utc;

use crate::models::timestamp::parse_date;
use crate::panel::{Modal, Panel, Tab};
use crate::records::PLAN_RECORD_PREFIX;

use super::dialogs::account::AccountFormState;
use super::dialogs::adjustment::AdjustmentFormState;
use super::dialogs::plan::PlanFormState;
use super::dialogs::transaction::TransactionFormState;
use super::widgets::TextInput;

pub const INVALID_DATE: &str = "Please enter a date as YYYY-MM-DD";

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// Single-line prompt shown in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Search,
    StartDate,
    EndDate,
}

/// What the highlighted row refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTarget {
    Transaction(String),
    Plan(String),
}

/// Main application state
pub struct App {
    pub panel: Panel,

    /// Whether the app should quit
    pub should_quit: bool,

    pub show_help: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Cursor in the account list
    pub sidebar_index: usize,

    /// Cursor in the active tab's table
    pub selected_row: usize,

    pub prompt: Option<Prompt>,
    pub prompt_input: TextInput,

    pub transaction_form: TransactionFormState,
    pub plan_form: PlanFormState,
    pub account_form: AccountFormState,
    pub adjustment_form: AdjustmentFormState,
    pub notes_input: TextInput,
    pub delete_input: TextInput,
}

impl App {
    pub fn new(panel: Panel) -> Self {
        Self {
            panel,
            should_quit: false,
            show_help: false,
            focused_panel: FocusedPanel::default(),
            sidebar_index: 0,
            selected_row: 0,
            prompt: None,
            prompt_input: TextInput::new(),
            transaction_form: TransactionFormState::new(),
            plan_form: PlanFormState::new(),
            account_form: AccountFormState::new(),
            adjustment_form: AdjustmentFormState::new(),
            notes_input: TextInput::new(),
            delete_input: TextInput::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.panel.set_tab(tab);
        self.selected_row = 0;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
        if self.focused_panel == FocusedPanel::Sidebar {
            self.sync_sidebar();
        }
    }

    /// Put the sidebar cursor on the selected account
    pub fn sync_sidebar(&mut self) {
        self.sidebar_index = self.panel.state.selected_index().unwrap_or(0);
    }

    /// Rows in the active tab
    pub fn row_count(&self) -> usize {
        let state = &self.panel.state;
        match state.active_tab {
            Tab::AllRecords => self.panel.records(Utc::now()).len(),
            Tab::Transactions => self.panel.visible_transactions().len(),
            Tab::Plans => state
                .selected_account
                .as_ref()
                .map_or(0, |a| a.recurring_plans.len()),
            Tab::AccountManagement => 0,
        }
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => self.sidebar_index = self.sidebar_index.saturating_sub(1),
            FocusedPanel::Main => self.selected_row = self.selected_row.saturating_sub(1),
        }
    }

    /// Move selection down in the focused panel
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                let max = self.panel.state.accounts.len();
                if self.sidebar_index < max.saturating_sub(1) {
                    self.sidebar_index += 1;
                }
            }
            FocusedPanel::Main => {
                let max = self.row_count();
                if self.selected_row < max.saturating_sub(1) {
                    self.selected_row += 1;
                }
            }
        }
    }

    /// Keep the table cursor inside the current row count
    pub fn clamp_selection(&mut self) {
        let max = self.row_count();
        if self.selected_row >= max {
            self.selected_row = max.saturating_sub(1);
        }
    }

    /// Load the account under the sidebar cursor
    pub fn select_sidebar_account(&mut self) {
        let Some(id) = self
            .panel
            .state
            .accounts
            .get(self.sidebar_index)
            .map(|a| a.id.clone())
        else {
            return;
        };
        self.panel.select_account(&id);
        self.selected_row = 0;
        self.focused_panel = FocusedPanel::Main;
    }

    /// Transaction or plan under the table cursor
    pub fn selected_target(&self) -> Option<RowTarget> {
        let state = &self.panel.state;
        match state.active_tab {
            Tab::AllRecords => {
                let record = self.panel.records(Utc::now()).into_iter().nth(self.selected_row)?;
                if record.is_plan() {
                    let id = record.id.strip_prefix(PLAN_RECORD_PREFIX).unwrap_or(&record.id);
                    Some(RowTarget::Plan(id.to_string()))
                } else {
                    Some(RowTarget::Transaction(record.id))
                }
            }
            Tab::Transactions => self
                .panel
                .visible_transactions()
                .get(self.selected_row)
                .map(|t| RowTarget::Transaction(t.id.clone())),
            Tab::Plans => state
                .selected_account
                .as_ref()?
                .recurring_plans
                .get(self.selected_row)
                .map(|p| RowTarget::Plan(p.id.clone())),
            Tab::AccountManagement => None,
        }
    }

    // ----- dialogs -----

    pub fn open_add(&mut self) {
        if self.panel.state.selected_account.is_none() {
            return;
        }
        match self.panel.state.active_tab {
            Tab::Plans => {
                self.plan_form = PlanFormState::new();
                self.panel.open_modal(Modal::PlanForm { editing: None });
            }
            Tab::AllRecords | Tab::Transactions => {
                self.transaction_form = TransactionFormState::new();
                self.panel.open_modal(Modal::TransactionForm { editing: None });
            }
            Tab::AccountManagement => {}
        }
    }

    pub fn open_edit_selected(&mut self) {
        let Some(account) = self.panel.state.selected_account.as_ref() else {
            return;
        };
        match self.selected_target() {
            Some(RowTarget::Transaction(id)) => {
                if let Some(txn) = account.find_transaction(&id) {
                    self.transaction_form = TransactionFormState::from_transaction(txn);
                    self.panel.open_modal(Modal::TransactionForm { editing: Some(id) });
                }
            }
            Some(RowTarget::Plan(id)) => {
                if let Some(plan) = account.find_plan(&id) {
                    self.plan_form = PlanFormState::from_plan(plan);
                    self.panel.open_modal(Modal::PlanForm { editing: Some(id) });
                }
            }
            None => {}
        }
    }

    pub fn open_delete_selected(&mut self) {
        match self.selected_target() {
            Some(RowTarget::Transaction(id)) => {
                self.panel.open_modal(Modal::ConfirmDeleteTransaction(id))
            }
            Some(RowTarget::Plan(id)) => self.panel.open_modal(Modal::ConfirmDeletePlan(id)),
            None => {}
        }
    }

    pub fn open_add_account(&mut self) {
        self.account_form = AccountFormState::new();
        self.panel.open_modal(Modal::AddAccount);
    }

    pub fn open_edit_account(&mut self) {
        if let Some(account) = &self.panel.state.selected_account {
            self.account_form = AccountFormState::for_rename(&account.name);
            self.panel.open_modal(Modal::EditAccount);
        }
    }

    pub fn open_delete_account(&mut self) {
        if self.panel.state.selected_account.is_some() {
            self.delete_input.clear();
            self.panel.open_modal(Modal::DeleteAccount);
        }
    }

    pub fn open_adjustment(&mut self) {
        if self.panel.state.selected_account.is_some() {
            self.adjustment_form = AdjustmentFormState::new();
            self.panel.open_modal(Modal::BalanceAdjust);
        }
    }

    pub fn open_notes(&mut self) {
        if self.panel.state.selected_account.is_some() {
            self.panel.open_modal(Modal::AccountNotes);
            self.notes_input = TextInput::new().content(self.panel.state.notes_draft.clone());
        }
    }

    // ----- filter prompt -----

    pub fn begin_prompt(&mut self, prompt: Prompt) {
        let current = match prompt {
            Prompt::Search => Some(self.panel.state.search_query.clone()),
            Prompt::StartDate | Prompt::EndDate => {
                let state = &mut self.panel.state;
                let Some(range) = state.active_range_mut() else {
                    return;
                };
                let date = if prompt == Prompt::StartDate {
                    range.start
                } else {
                    range.end
                };
                date.map(|d| d.format("%Y-%m-%d").to_string())
            }
        };
        let placeholder = if prompt == Prompt::Search { "" } else { "YYYY-MM-DD" };
        self.prompt_input = TextInput::new()
            .placeholder(placeholder)
            .content(current.unwrap_or_default());
        self.prompt = Some(prompt);
    }

    /// Search applies while typing; dates apply on submit
    pub fn prompt_edited(&mut self) {
        if self.prompt == Some(Prompt::Search) {
            self.panel.state.search_query = self.prompt_input.value().to_string();
            self.selected_row = 0;
        }
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt else {
            return;
        };
        let raw = self.prompt_input.value().trim().to_string();

        if prompt != Prompt::Search {
            let date = if raw.is_empty() {
                None
            } else {
                match parse_date(&raw) {
                    Some(date) => Some(date),
                    None => {
                        self.panel.state.error = Some(INVALID_DATE.to_string());
                        return;
                    }
                }
            };
            if let Some(range) = self.panel.state.active_range_mut() {
                if prompt == Prompt::StartDate {
                    range.start = date;
                } else {
                    range.end = date;
                }
            }
        }

        self.prompt = None;
        self.selected_row = 0;
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Reset type, date and search filters
    pub fn clear_filters(&mut self) {
        let state = &mut self.panel.state;
        state.search_query.clear();
        state.transaction_kind = None;
        state.transaction_range = Default::default();
        state.records_range = Default::default();
        self.selected_row = 0;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::host::channel::mock::MockChannel;
    use crate::host::FinanceClient;
    use crate::i18n::Translator;
    use chrono::NaiveDate;
    use serde_json::json;

    /// App with two accounts and "checking" loaded
    pub(crate) fn loaded_app() -> (App, MockChannel) {
        let mock = MockChannel::new();
        mock.respond(json!({"accounts": [
                {"id": "checking", "name": "Checking", "balance": 1180},
                {"id": "cash", "name": "Cash", "balance": 40}
            ]}))
            .respond(json!({"account": {
                "id": "checking", "name": "Checking", "balance": 1180, "notes": "main",
                "transactions": [
                    {"id": "tx_salary", "amount": 3000, "note": "salary", "timestamp": "2024-01-05", "type": "manual"},
                    {"id": "tx_coffee", "amount": -20, "note": "coffee", "timestamp": "2024-01-10", "type": "manual"}
                ],
                "recurring_plans": {
                    "plan_rent": {"title": "Rent", "amount": -800, "frequency": "monthly", "day": 1, "active": true, "next_date": "2024-01-01"},
                    "plan_gym": {"title": "Gym", "amount": -30, "frequency": "monthly", "day": 3, "active": false}
                }
            }}))
            .respond(json!({"data": []}));

        let panel = Panel::new(FinanceClient::new(Box::new(mock.clone())), Translator::default());
        let mut app = App::new(panel);
        app.panel.load_accounts();
        (app, mock)
    }

    #[test]
    fn test_switch_tab_resets_row() {
        let (mut app, _mock) = loaded_app();
        app.selected_row = 2;
        app.switch_tab(Tab::Plans);
        assert_eq!(app.selected_row, 0);
        assert_eq!(app.panel.state.active_tab, Tab::Plans);
    }

    #[test]
    fn test_row_counts_per_tab() {
        let (mut app, _mock) = loaded_app();
        assert_eq!(app.row_count(), 3);
        app.switch_tab(Tab::Transactions);
        assert_eq!(app.row_count(), 2);
        app.switch_tab(Tab::Plans);
        assert_eq!(app.row_count(), 2);
        app.switch_tab(Tab::AccountManagement);
        assert_eq!(app.row_count(), 0);
    }

    #[test]
    fn test_selected_target_strips_plan_prefix() {
        let (mut app, _mock) = loaded_app();
        // coffee, salary, Rent
        app.selected_row = 2;
        assert_eq!(app.selected_target(), Some(RowTarget::Plan("plan_rent".into())));

        app.selected_row = 0;
        assert_eq!(app.selected_target(), Some(RowTarget::Transaction("tx_coffee".into())));
    }

    #[test]
    fn test_open_edit_loads_form() {
        let (mut app, _mock) = loaded_app();
        app.switch_tab(Tab::Transactions);
        app.open_edit_selected();

        assert_eq!(
            app.panel.state.modal,
            Some(Modal::TransactionForm { editing: Some("tx_coffee".into()) })
        );
        assert_eq!(app.transaction_form.amount_input.value(), "-20");
    }

    #[test]
    fn test_open_delete_plan_from_plans_tab() {
        let (mut app, _mock) = loaded_app();
        app.switch_tab(Tab::Plans);
        app.move_down();
        app.open_delete_selected();

        assert_eq!(
            app.panel.state.modal,
            Some(Modal::ConfirmDeletePlan("plan_gym".into()))
        );
    }

    #[test]
    fn test_move_down_is_bounded() {
        let (mut app, _mock) = loaded_app();
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_row, 2);

        app.toggle_panel_focus();
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.sidebar_index, 1);
    }

    #[test]
    fn test_search_prompt_applies_live() {
        let (mut app, _mock) = loaded_app();
        app.begin_prompt(Prompt::Search);
        for c in "rent".chars() {
            app.prompt_input.insert(c);
            app.prompt_edited();
        }
        assert_eq!(app.panel.state.search_query, "rent");
        assert_eq!(app.row_count(), 1);

        app.submit_prompt();
        assert!(app.prompt.is_none());
    }

    #[test]
    fn test_date_prompt() {
        let (mut app, _mock) = loaded_app();
        app.begin_prompt(Prompt::StartDate);
        app.prompt_input.set("2024-01-05");
        app.submit_prompt();

        assert_eq!(
            app.panel.state.records_range.start,
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn test_invalid_date_keeps_prompt_open() {
        let (mut app, _mock) = loaded_app();
        app.begin_prompt(Prompt::EndDate);
        app.prompt_input.set("01/05/2024");
        app.submit_prompt();

        assert_eq!(app.prompt, Some(Prompt::EndDate));
        assert_eq!(app.panel.state.error.as_deref(), Some(INVALID_DATE));
    }

    #[test]
    fn test_clear_filters() {
        let (mut app, _mock) = loaded_app();
        app.panel.state.search_query = "x".into();
        app.panel.state.cycle_transaction_kind();
        app.clear_filters();

        assert!(app.panel.state.search_query.is_empty());
        assert!(app.panel.state.transaction_kind.is_none());
    }
}
