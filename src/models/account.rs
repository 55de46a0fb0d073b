//! Account model
//!
//! The list endpoint returns summaries; the detail endpoint returns the full
//! account with its transactions and recurring plans.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::plan::{deserialize_plans, RecurringPlan};
use super::transaction::{null_as_empty, Transaction};

/// One row of the account list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub balance: Money,
}

/// Full account detail as returned by the host
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: String,

    pub name: String,

    /// Maintained by the host; never recomputed here
    pub balance: Money,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,

    /// Stored (append) order
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Document order of the host's `{plan_id: plan}` object
    #[serde(default, deserialize_with = "deserialize_plans")]
    pub recurring_plans: Vec<RecurringPlan>,
}

impl Account {
    /// Most recently appended transaction
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    pub fn active_plans(&self) -> impl Iterator<Item = &RecurringPlan> {
        self.recurring_plans.iter().filter(|p| p.active)
    }

    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn find_plan(&self, id: &str) -> Option<&RecurringPlan> {
        self.recurring_plans.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL: &str = r#"{
        "id": "checking_1a2b3c4d",
        "name": "Checking",
        "balance": 1180.0,
        "notes": null,
        "transactions": [
            {"id": "tx_1", "amount": -20, "note": "coffee", "timestamp": "2024-01-10T08:00:00+00:00", "type": "manual"},
            {"id": "tx_2", "amount": 3000, "note": "salary", "timestamp": "2024-01-01T09:00:00+00:00", "type": "manual"}
        ],
        "recurring_plans": {
            "plan_b": {"title": "Rent", "amount": -800, "frequency": "monthly", "day": 1, "active": true, "next_date": "2024-02-01"},
            "plan_a": {"title": "Old gym", "amount": -30, "frequency": "monthly", "day": 5, "active": false}
        }
    }"#;

    #[test]
    fn test_deserialize_detail() {
        let account: Account = serde_json::from_str(DETAIL).unwrap();

        assert_eq!(account.balance.cents(), 118000);
        assert_eq!(account.notes, "");
        assert_eq!(account.transactions.len(), 2);
        assert_eq!(account.recurring_plans[0].id, "plan_b");
        assert_eq!(account.recurring_plans[0].title, "Rent");
    }

    #[test]
    fn test_last_transaction_is_last_appended() {
        let account: Account = serde_json::from_str(DETAIL).unwrap();
        assert_eq!(account.last_transaction().unwrap().id, "tx_2");
    }

    #[test]
    fn test_active_plans_and_lookup() {
        let account: Account = serde_json::from_str(DETAIL).unwrap();

        let active: Vec<_> = account.active_plans().map(|p| p.id.as_str()).collect();
        assert_eq!(active, vec!["plan_b"]);
        assert!(account.find_plan("plan_a").is_some());
        assert!(account.find_transaction("tx_9").is_none());
    }

    #[test]
    fn test_minimal_detail() {
        let account: Account =
            serde_json::from_str(r#"{"id": "a", "name": "Cash", "balance": 0}"#).unwrap();
        assert!(account.last_transaction().is_none());
        assert!(account.recurring_plans.is_empty());
    }
}
