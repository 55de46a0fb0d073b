//! Loads and mutations
//!
//! Every mutation follows the same contract: validate locally, make one host
//! call, then on success close the modal and reload from the host. Nothing is
//! patched into local state optimistically. Failures land in the banner and
//! leave the modal open.

use chrono::{DateTime, Utc};

use super::forms::{
    delete_confirmation_matches, AccountDraft, AdjustmentDraft, PlanDraft, TransactionDraft,
};
use super::state::{Modal, PanelState, Tab};
use crate::error::PanelError;
use crate::host::FinanceClient;
use crate::i18n::Translator;
use crate::models::{Transaction, TransactionType};
use crate::records::{all_records, filter_transactions, DisplayRecord};

/// Default chart window in months
pub const DEFAULT_CHART_MONTHS: u32 = 6;

/// The panel: view-model state plus the host client that feeds it
pub struct Panel {
    client: FinanceClient,
    translator: Translator,
    chart_months: u32,
    pub state: PanelState,
}

impl Panel {
    pub fn new(client: FinanceClient, translator: Translator) -> Self {
        Self {
            client,
            translator,
            chart_months: DEFAULT_CHART_MONTHS,
            state: PanelState::new(),
        }
    }

    pub fn with_chart_months(mut self, months: u32) -> Self {
        self.chart_months = months;
        self
    }

    /// Host requests issued so far
    pub fn request_count(&self) -> u64 {
        self.client.calls()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Shorthand for `translator().t(key)`
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.translator.t(key)
    }

    fn report(&mut self, err: PanelError, fallback: &str) {
        let message = err.banner_message(fallback);
        if err.is_validation() {
            log::debug!("rejected input: {}", message);
        } else {
            log::warn!("{}: {}", fallback, err);
        }
        self.state.error = Some(message);
    }

    /// Close the modal and clear the banner after an accepted mutation
    fn finish_mutation(&mut self) {
        self.state.modal = None;
        self.state.error = None;
    }

    fn selected_id(&self) -> Option<String> {
        self.state.selected_account_id.clone()
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    // ----- loads -----

    /// Fetch the account list; pick the first account if none is selected yet
    pub fn load_accounts(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.client.accounts() {
            Ok(accounts) => {
                log::info!("loaded {} accounts", accounts.len());
                self.state.accounts = accounts;
                if self.state.selected_account_id.is_none() {
                    if let Some(first) = self.state.accounts.first() {
                        self.state.selected_account_id = Some(first.id.clone());
                        self.load_account_details();
                    }
                }
            }
            Err(e) => self.report(e, "Failed to load accounts"),
        }

        self.state.loading = false;
    }

    /// Fetch detail of the selected account, then its chart data
    pub fn load_account_details(&mut self) {
        let Some(account_id) = self.selected_id() else {
            return;
        };

        self.state.loading = true;
        match self.client.account(&account_id) {
            Ok(account) => {
                self.state.notes_draft = account.notes.clone();
                self.state.selected_account = Some(account);
                self.load_chart_data();
            }
            Err(e) => self.report(e, "Failed to load account details"),
        }
        self.state.loading = false;
    }

    /// Chart failures stay in `chart_error`; the banner is not touched
    pub fn load_chart_data(&mut self) {
        let Some(account_id) = self.selected_id() else {
            return;
        };

        self.state.chart_error = None;
        match self.client.chart_data(&account_id, self.chart_months) {
            Ok(data) => self.state.chart_data = data,
            Err(e) => {
                log::warn!("Failed to load chart data: {}", e);
                self.state.chart_error = Some(e.banner_message("Failed to load chart data"));
                self.state.chart_data.clear();
            }
        }
    }

    pub fn select_account(&mut self, account_id: &str) {
        self.state.selected_account_id = Some(account_id.to_string());
        self.load_account_details();
    }

    /// Reload list and detail
    pub fn refresh(&mut self) {
        self.load_accounts();
        self.load_account_details();
    }

    // ----- navigation and modals -----

    pub fn set_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
    }

    pub fn open_modal(&mut self, modal: Modal) {
        if matches!(modal, Modal::DeleteAccount) {
            self.state.delete_confirm_text.clear();
        }
        if matches!(modal, Modal::AccountNotes) {
            self.state.notes_draft = self
                .state
                .selected_account
                .as_ref()
                .map(|a| a.notes.clone())
                .unwrap_or_default();
        }
        self.state.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        if matches!(self.state.modal, Some(Modal::DeleteAccount)) {
            self.state.delete_confirm_text.clear();
        }
        self.state.modal = None;
    }

    // ----- derived views -----

    /// All Records rows for the selected account
    pub fn records(&self, now: DateTime<Utc>) -> Vec<DisplayRecord> {
        match &self.state.selected_account {
            Some(account) => {
                all_records(account, &self.state.records_filter(), &self.translator, now)
            }
            None => Vec::new(),
        }
    }

    /// Transactions tab rows for the selected account
    pub fn visible_transactions(&self) -> Vec<&Transaction> {
        match &self.state.selected_account {
            Some(account) => {
                filter_transactions(&account.transactions, &self.state.transactions_filter())
            }
            None => Vec::new(),
        }
    }

    pub fn delete_enabled(&self) -> bool {
        self.state
            .selected_account
            .as_ref()
            .is_some_and(|a| delete_confirmation_matches(&self.state.delete_confirm_text, &a.name))
    }

    // ----- mutations -----

    /// Add or update, depending on the open transaction form
    pub fn save_transaction(&mut self, draft: &TransactionDraft) -> bool {
        const FALLBACK: &str = "Failed to save transaction";
        let Some(account_id) = self.selected_id() else {
            return false;
        };
        let (amount, note) = match draft.validate() {
            Ok(fields) => fields,
            Err(e) => {
                self.report(e, FALLBACK);
                return false;
            }
        };

        let editing = match &self.state.modal {
            Some(Modal::TransactionForm { editing }) => editing.clone(),
            _ => None,
        };
        let result = match editing {
            Some(txn_id) => self
                .client
                .update_transaction(&account_id, &txn_id, amount, &note),
            None => self
                .client
                .add_transaction(&account_id, amount, &note, None)
                .map(|_| ()),
        };

        self.complete(result, FALLBACK)
    }

    pub fn delete_transaction(&mut self, transaction_id: &str) -> bool {
        let Some(account_id) = self.selected_id() else {
            return false;
        };
        let result = self.client.delete_transaction(&account_id, transaction_id);
        self.complete(result, "Failed to delete transaction")
    }

    /// Add or update, depending on the open plan form
    pub fn save_plan(&mut self, draft: &PlanDraft) -> bool {
        const FALLBACK: &str = "Failed to save plan";
        let Some(account_id) = self.selected_id() else {
            return false;
        };
        let fields = match draft.validate() {
            Ok(fields) => fields,
            Err(e) => {
                self.report(e, FALLBACK);
                return false;
            }
        };

        let editing = match &self.state.modal {
            Some(Modal::PlanForm { editing }) => editing.clone(),
            _ => None,
        };
        let result = match editing {
            Some(plan_id) => self.client.update_plan(&account_id, &plan_id, &fields),
            None => self.client.add_plan(&account_id, &fields).map(|id| {
                log::info!("host created plan {:?}", id);
            }),
        };

        self.complete(result, FALLBACK)
    }

    pub fn delete_plan(&mut self, plan_id: &str) -> bool {
        let Some(account_id) = self.selected_id() else {
            return false;
        };
        let result = self.client.delete_plan(&account_id, plan_id);
        self.complete(result, "Failed to delete plan")
    }

    /// Create an account, then switch to it
    pub fn create_account(&mut self, draft: &AccountDraft) -> bool {
        const FALLBACK: &str = "Failed to create account";
        let (name, balance) = match draft.validate_new() {
            Ok(fields) => fields,
            Err(e) => {
                self.report(e, FALLBACK);
                return false;
            }
        };

        match self.client.add_account(&name, balance) {
            Ok(created) => {
                log::info!("created account {}", created.id);
                self.finish_mutation();
                self.load_accounts();
                self.select_account(&created.id);
                true
            }
            Err(e) => {
                self.report(e, FALLBACK);
                false
            }
        }
    }

    pub fn rename_account(&mut self, draft: &AccountDraft) -> bool {
        const FALLBACK: &str = "Failed to update account";
        let Some(account_id) = self.selected_id() else {
            return false;
        };
        let name = match draft.validate_name() {
            Ok(name) => name,
            Err(e) => {
                self.report(e, FALLBACK);
                return false;
            }
        };

        match self.client.rename_account(&account_id, &name) {
            Ok(()) => {
                self.finish_mutation();
                self.load_accounts();
                self.load_account_details();
                true
            }
            Err(e) => {
                self.report(e, FALLBACK);
                false
            }
        }
    }

    /// Delete the selected account once its name has been typed back
    pub fn delete_account(&mut self) -> bool {
        if !self.delete_enabled() {
            return false;
        }
        let Some(account_id) = self.selected_id() else {
            return false;
        };

        match self.client.delete_account(&account_id) {
            Ok(()) => {
                log::info!("deleted account {}", account_id);
                self.finish_mutation();
                self.state.delete_confirm_text.clear();
                self.state.selected_account_id = None;
                self.state.selected_account = None;
                self.state.chart_data.clear();
                self.state.chart_error = None;
                // Picks the first remaining account and loads its detail
                self.load_accounts();
                true
            }
            Err(e) => {
                self.report(e, "Failed to delete account");
                false
            }
        }
    }

    /// Post a signed adjustment transaction against the selected account
    pub fn adjust_balance(&mut self, draft: &AdjustmentDraft) -> bool {
        const FALLBACK: &str = "Failed to adjust balance";
        let Some(account_id) = self.selected_id() else {
            return false;
        };
        let (amount, note) = match draft.validate(&self.translator) {
            Ok(fields) => fields,
            Err(e) => {
                self.report(e, FALLBACK);
                return false;
            }
        };

        let result = self
            .client
            .add_transaction(&account_id, amount, &note, Some(TransactionType::Adjustment))
            .map(|_| ());
        self.complete(result, FALLBACK)
    }

    /// Save `notes_draft` as the selected account's notes
    pub fn save_notes(&mut self) -> bool {
        let Some(account_id) = self.selected_id() else {
            return false;
        };
        let notes = self.state.notes_draft.clone();

        match self.client.update_notes(&account_id, &notes) {
            Ok(()) => {
                self.finish_mutation();
                self.load_account_details();
                true
            }
            Err(e) => {
                self.report(e, "Failed to save notes");
                false
            }
        }
    }

    /// Shared tail of the detail-reloading mutations
    fn complete(&mut self, result: Result<(), PanelError>, fallback: &str) -> bool {
        match result {
            Ok(()) => {
                self.finish_mutation();
                self.load_account_details();
                true
            }
            Err(e) => {
                self.report(e, fallback);
                false
            }
        }
    }
}
