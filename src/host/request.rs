//! The `ha_finance/*` request vocabulary
//!
//! Each variant serialises as `{"type": "ha_finance/<command>", ...fields}`.
//! Optional fields are left out entirely when unset so the host only touches
//! what the panel actually changed.

use serde::Serialize;

use crate::models::{Frequency, Money, TransactionType};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum HostRequest {
    #[serde(rename = "ha_finance/accounts")]
    Accounts,

    #[serde(rename = "ha_finance/account")]
    Account { account_id: String },

    #[serde(rename = "ha_finance/chart_data")]
    ChartData { account_id: String, months: u32 },

    #[serde(rename = "ha_finance/add_transaction")]
    AddTransaction {
        account_id: String,
        amount: Money,
        note: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        transaction_type: Option<TransactionType>,
    },

    #[serde(rename = "ha_finance/update_transaction")]
    UpdateTransaction {
        account_id: String,
        transaction_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<Money>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },

    #[serde(rename = "ha_finance/delete_transaction")]
    DeleteTransaction {
        account_id: String,
        transaction_id: String,
    },

    #[serde(rename = "ha_finance/add_plan")]
    AddPlan {
        account_id: String,
        title: String,
        amount: Money,
        frequency: Frequency,
        day: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        month: Option<u8>,
        active: bool,
    },

    #[serde(rename = "ha_finance/update_plan")]
    UpdatePlan {
        account_id: String,
        plan_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<Money>,
        #[serde(skip_serializing_if = "Option::is_none")]
        frequency: Option<Frequency>,
        #[serde(skip_serializing_if = "Option::is_none")]
        day: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        month: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        active: Option<bool>,
    },

    #[serde(rename = "ha_finance/delete_plan")]
    DeletePlan { account_id: String, plan_id: String },

    #[serde(rename = "ha_finance/add_account")]
    AddAccount { name: String, initial_balance: Money },

    #[serde(rename = "ha_finance/update_account")]
    UpdateAccount {
        account_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },

    #[serde(rename = "ha_finance/delete_account")]
    DeleteAccount { account_id: String },
}

impl HostRequest {
    /// Wire command name, used for logging
    pub fn command(&self) -> &'static str {
        match self {
            Self::Accounts => "ha_finance/accounts",
            Self::Account { .. } => "ha_finance/account",
            Self::ChartData { .. } => "ha_finance/chart_data",
            Self::AddTransaction { .. } => "ha_finance/add_transaction",
            Self::UpdateTransaction { .. } => "ha_finance/update_transaction",
            Self::DeleteTransaction { .. } => "ha_finance/delete_transaction",
            Self::AddPlan { .. } => "ha_finance/add_plan",
            Self::UpdatePlan { .. } => "ha_finance/update_plan",
            Self::DeletePlan { .. } => "ha_finance/delete_plan",
            Self::AddAccount { .. } => "ha_finance/add_account",
            Self::UpdateAccount { .. } => "ha_finance/update_account",
            Self::DeleteAccount { .. } => "ha_finance/delete_account",
        }
    }
}
