//! Panel view-model state
//!
//! Everything the presentation layer reads. Mutated only by [`super::Panel`]
//! and by plain input handling (tab switches, filter edits, drafts).

use crate::models::{Account, AccountSummary, ChartDataPoint, TransactionType};
use crate::records::{DateRange, RecordsFilter, TransactionFilter};

/// Main content tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    AllRecords,
    Transactions,
    Plans,
    AccountManagement,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Self::AllRecords,
        Self::Transactions,
        Self::Plans,
        Self::AccountManagement,
    ];

    /// Translation key of the tab title
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::AllRecords => "all_records",
            Self::Transactions => "transactions",
            Self::Plans => "recurring_plans",
            Self::AccountManagement => "account_management",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Open modal form or confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Add (`editing: None`) or edit a transaction
    TransactionForm { editing: Option<String> },
    /// Add (`editing: None`) or edit a recurring plan
    PlanForm { editing: Option<String> },
    AddAccount,
    EditAccount,
    DeleteAccount,
    BalanceAdjust,
    AccountNotes,
    ConfirmDeleteTransaction(String),
    ConfirmDeletePlan(String),
}

/// The panel's view-model
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub accounts: Vec<AccountSummary>,
    pub selected_account_id: Option<String>,
    /// Detail of the selected account, replaced wholesale on every reload
    pub selected_account: Option<Account>,
    pub active_tab: Tab,
    pub loading: bool,
    /// Single error banner
    pub error: Option<String>,
    pub chart_data: Vec<ChartDataPoint>,
    pub chart_error: Option<String>,

    /// Transactions tab type filter (`None` = all)
    pub transaction_kind: Option<TransactionType>,
    /// Transactions tab date window
    pub transaction_range: DateRange,
    /// All Records tab date window
    pub records_range: DateRange,
    /// Search text shared by both record tabs
    pub search_query: String,

    pub modal: Option<Modal>,
    pub delete_confirm_text: String,
    pub notes_draft: String,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn selected_summary(&self) -> Option<&AccountSummary> {
        let id = self.selected_account_id.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_account_id.as_deref()?;
        self.accounts.iter().position(|a| a.id == id)
    }

    pub fn records_filter(&self) -> RecordsFilter {
        RecordsFilter {
            range: self.records_range,
            search: self.search_query.clone(),
        }
    }

    pub fn transactions_filter(&self) -> TransactionFilter {
        TransactionFilter {
            kind: self.transaction_kind,
            range: self.transaction_range,
            search: self.search_query.clone(),
        }
    }

    /// Step the type filter: all, manual, recurring, adjustment, all...
    pub fn cycle_transaction_kind(&mut self) {
        self.transaction_kind = match self.transaction_kind {
            None => Some(TransactionType::Manual),
            Some(TransactionType::Manual) => Some(TransactionType::Recurring),
            Some(TransactionType::Recurring) => Some(TransactionType::Adjustment),
            Some(_) => None,
        };
    }

    /// Date window of the active tab, if it has one
    pub fn active_range_mut(&mut self) -> Option<&mut DateRange> {
        match self.active_tab {
            Tab::AllRecords => Some(&mut self.records_range),
            Tab::Transactions => Some(&mut self.transaction_range),
            Tab::Plans | Tab::AccountManagement => None,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.modal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::AllRecords.next(), Tab::Transactions);
        assert_eq!(Tab::AccountManagement.next(), Tab::AllRecords);
        assert_eq!(Tab::AllRecords.prev(), Tab::AccountManagement);
        assert_eq!(Tab::Plans.index(), 2);
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = PanelState::new();
        assert!(state.loading);
        assert_eq!(state.active_tab, Tab::AllRecords);
        assert!(state.selected_summary().is_none());
    }

    #[test]
    fn test_cycle_transaction_kind() {
        let mut state = PanelState::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.cycle_transaction_kind();
            seen.push(state.transaction_kind);
        }
        assert_eq!(
            seen,
            vec![
                Some(TransactionType::Manual),
                Some(TransactionType::Recurring),
                Some(TransactionType::Adjustment),
                None
            ]
        );
    }

    #[test]
    fn test_filters_share_search() {
        let mut state = PanelState::new();
        state.search_query = "rent".into();
        state.transaction_kind = Some(TransactionType::Recurring);

        assert_eq!(state.records_filter().search, "rent");
        assert_eq!(state.transactions_filter().search, "rent");
        assert_eq!(state.transactions_filter().kind, Some(TransactionType::Recurring));
    }

    #[test]
    fn test_active_range() {
        let mut state = PanelState::new();
        assert!(state.active_range_mut().is_some());
        state.active_tab = Tab::Plans;
        assert!(state.active_range_mut().is_none());
    }
}
