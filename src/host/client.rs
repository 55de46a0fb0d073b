//! Typed client over a [`HostChannel`]
//!
//! One method per host command. Read commands decode their payload; mutations
//! only care whether the host accepted them.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::channel::HostChannel;
use super::request::HostRequest;
use crate::error::{PanelError, PanelResult};
use crate::models::{
    Account, AccountSummary, ChartDataPoint, Frequency, Money, Transaction, TransactionType,
};

/// Fields of a recurring plan as submitted from a form
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFields {
    pub title: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub day: u8,
    pub month: Option<u8>,
    pub active: bool,
}

#[derive(Deserialize)]
struct AccountsPayload {
    #[serde(default)]
    accounts: Vec<AccountSummary>,
}

#[derive(Deserialize)]
struct AccountPayload {
    account: Account,
}

#[derive(Deserialize)]
struct ChartPayload {
    #[serde(default)]
    data: Vec<ChartDataPoint>,
}

#[derive(Deserialize)]
struct CreatedAccountPayload {
    account: AccountSummary,
}

#[derive(Deserialize)]
struct CreatedPlanPayload {
    #[serde(default)]
    plan_id: Option<String>,
}

#[derive(Deserialize)]
struct CreatedTransactionPayload {
    #[serde(default)]
    transaction: Option<Transaction>,
}

pub struct FinanceClient {
    channel: Box<dyn HostChannel>,
    calls: u64,
}

impl FinanceClient {
    pub fn new(channel: Box<dyn HostChannel>) -> Self {
        Self { channel, calls: 0 }
    }

    /// Number of requests issued so far, answered or not
    pub fn calls(&self) -> u64 {
        self.calls
    }

    fn fetch<T: DeserializeOwned>(&mut self, request: HostRequest) -> PanelResult<T> {
        self.calls += 1;
        let value = self.channel.call(&request)?;
        serde_json::from_value(value).map_err(|e| {
            PanelError::Json(format!("Unexpected {} response: {}", request.command(), e))
        })
    }

    fn execute(&mut self, request: HostRequest) -> PanelResult<()> {
        self.calls += 1;
        self.channel.call(&request).map(|_| ())
    }

    pub fn accounts(&mut self) -> PanelResult<Vec<AccountSummary>> {
        let payload: AccountsPayload = self.fetch(HostRequest::Accounts)?;
        Ok(payload.accounts)
    }

    pub fn account(&mut self, account_id: &str) -> PanelResult<Account> {
        let payload: AccountPayload = self.fetch(HostRequest::Account {
            account_id: account_id.to_string(),
        })?;
        Ok(payload.account)
    }

    /// Monthly income/expense totals, oldest first
    pub fn chart_data(&mut self, account_id: &str, months: u32) -> PanelResult<Vec<ChartDataPoint>> {
        let payload: ChartPayload = self.fetch(HostRequest::ChartData {
            account_id: account_id.to_string(),
            months,
        })?;
        Ok(payload.data)
    }

    /// Add a transaction; `kind` is only sent for non-manual entries
    pub fn add_transaction(
        &mut self,
        account_id: &str,
        amount: Money,
        note: &str,
        kind: Option<TransactionType>,
    ) -> PanelResult<Option<Transaction>> {
        let payload: CreatedTransactionPayload = self.fetch(HostRequest::AddTransaction {
            account_id: account_id.to_string(),
            amount,
            note: note.to_string(),
            transaction_type: kind,
        })?;
        Ok(payload.transaction)
    }

    pub fn update_transaction(
        &mut self,
        account_id: &str,
        transaction_id: &str,
        amount: Money,
        note: &str,
    ) -> PanelResult<()> {
        self.execute(HostRequest::UpdateTransaction {
            account_id: account_id.to_string(),
            transaction_id: transaction_id.to_string(),
            amount: Some(amount),
            note: Some(note.to_string()),
        })
    }

    pub fn delete_transaction(&mut self, account_id: &str, transaction_id: &str) -> PanelResult<()> {
        self.execute(HostRequest::DeleteTransaction {
            account_id: account_id.to_string(),
            transaction_id: transaction_id.to_string(),
        })
    }

    /// Add a plan, returning the id the host assigned
    pub fn add_plan(&mut self, account_id: &str, plan: &PlanFields) -> PanelResult<Option<String>> {
        let payload: CreatedPlanPayload = self.fetch(HostRequest::AddPlan {
            account_id: account_id.to_string(),
            title: plan.title.clone(),
            amount: plan.amount,
            frequency: plan.frequency,
            day: plan.day,
            month: plan.month,
            active: plan.active,
        })?;
        Ok(payload.plan_id)
    }

    pub fn update_plan(
        &mut self,
        account_id: &str,
        plan_id: &str,
        plan: &PlanFields,
    ) -> PanelResult<()> {
        self.execute(HostRequest::UpdatePlan {
            account_id: account_id.to_string(),
            plan_id: plan_id.to_string(),
            title: Some(plan.title.clone()),
            amount: Some(plan.amount),
            frequency: Some(plan.frequency),
            day: Some(plan.day),
            month: plan.month,
            active: Some(plan.active),
        })
    }

    pub fn delete_plan(&mut self, account_id: &str, plan_id: &str) -> PanelResult<()> {
        self.execute(HostRequest::DeletePlan {
            account_id: account_id.to_string(),
            plan_id: plan_id.to_string(),
        })
    }

    /// Create an account and return its summary
    pub fn add_account(&mut self, name: &str, initial_balance: Money) -> PanelResult<AccountSummary> {
        let payload: CreatedAccountPayload = self.fetch(HostRequest::AddAccount {
            name: name.to_string(),
            initial_balance,
        })?;
        Ok(payload.account)
    }

    pub fn rename_account(&mut self, account_id: &str, name: &str) -> PanelResult<()> {
        self.execute(HostRequest::UpdateAccount {
            account_id: account_id.to_string(),
            name: Some(name.to_string()),
            notes: None,
        })
    }

    pub fn update_notes(&mut self, account_id: &str, notes: &str) -> PanelResult<()> {
        self.execute(HostRequest::UpdateAccount {
            account_id: account_id.to_string(),
            name: None,
            notes: Some(notes.to_string()),
        })
    }

    pub fn delete_account(&mut self, account_id: &str) -> PanelResult<()> {
        self.execute(HostRequest::DeleteAccount {
            account_id: account_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::channel::mock::MockChannel;
    use serde_json::json;

    fn client() -> (FinanceClient, MockChannel) {
        let mock = MockChannel::new();
        (FinanceClient::new(Box::new(mock.clone())), mock)
    }

    #[test]
    fn test_accounts() {
        let (mut client, mock) = client();
        mock.respond(json!({"accounts": [
            {"id": "checking", "name": "Checking", "balance": 1180.5},
            {"id": "cash", "name": "Cash", "balance": 0}
        ]}));

        let accounts = client.accounts().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(client.calls(), 1);
        assert_eq!(accounts[0].balance.cents(), 118050);
        assert_eq!(mock.commands(), vec!["ha_finance/accounts"]);
    }

    #[test]
    fn test_chart_data_sends_months() {
        let (mut client, mock) = client();
        mock.respond(json!({"data": [{"month": "2024-01", "income": 10, "expenses": 5}]}));

        let data = client.chart_data("checking", 6).unwrap();
        assert_eq!(data[0].month, "2024-01");
        assert_eq!(
            mock.requests()[0],
            HostRequest::ChartData {
                account_id: "checking".into(),
                months: 6
            }
        );
    }

    #[test]
    fn test_add_account_returns_summary() {
        let (mut client, mock) = client();
        mock.respond(json!({"success": true, "account": {"id": "savings_a1b2c3", "name": "Savings", "balance": 100}}));

        let created = client.add_account("Savings", Money::from_cents(10000)).unwrap();
        assert_eq!(created.id, "savings_a1b2c3");
    }

    #[test]
    fn test_add_plan_returns_id() {
        let (mut client, mock) = client();
        mock.respond(json!({"success": true, "plan_id": "plan_1234abcd"}));

        let plan = PlanFields {
            title: "Rent".into(),
            amount: Money::from_cents(-80000),
            frequency: Frequency::Monthly,
            day: 1,
            month: None,
            active: true,
        };
        assert_eq!(client.add_plan("checking", &plan).unwrap().as_deref(), Some("plan_1234abcd"));
    }

    #[test]
    fn test_remote_error_passes_through() {
        let (mut client, mock) = client();
        mock.fail("not_found", "Account not found");

        let err = client.delete_account("gone").unwrap_err();
        assert!(err.is_remote());
    }

    #[test]
    fn test_malformed_payload() {
        let (mut client, mock) = client();
        mock.respond(json!({"unexpected": true}));

        let err = client.account("checking").unwrap_err();
        assert!(matches!(err, PanelError::Json(_)));
    }
}
