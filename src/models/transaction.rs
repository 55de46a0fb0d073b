//! Transaction model
//!
//! Transactions are owned by the host; the panel only reads them and asks the
//! host to add, edit or remove them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::timestamp::parse_timestamp;

/// Where a transaction came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Entered by hand
    #[default]
    Manual,
    /// Materialised by the host from a recurring plan
    Recurring,
    /// Direct balance correction
    Adjustment,
    /// Any type this client does not know about
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Types offered by the type filter, in display order
    pub const ALL: [TransactionType; 3] = [Self::Manual, Self::Recurring, Self::Adjustment];

    /// Wire name, also the translation key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Recurring => "recurring",
            Self::Adjustment => "adjustment",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire/CLI name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == s.trim().to_lowercase())
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single signed money movement on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,

    /// Positive is income, negative is expense
    pub amount: Money,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,

    #[serde(rename = "type", default)]
    pub transaction_type: TransactionType,

    /// ISO 8601 as written by the host
    pub timestamp: String,

    /// Plan that produced this transaction, for recurring ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

impl Transaction {
    /// Parsed timestamp, `None` if the host wrote something unreadable
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_transaction() {
        let json = r#"{
            "id": "tx_1a2b3c4d",
            "amount": -20.5,
            "note": "coffee",
            "timestamp": "2024-01-10T08:00:00+00:00",
            "type": "manual",
            "plan_id": null
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(txn.amount.cents(), -2050);
        assert_eq!(txn.transaction_type, TransactionType::Manual);
        assert!(txn.occurred_at().is_some());
        assert!(txn.plan_id.is_none());
    }

    #[test]
    fn test_missing_note_and_unknown_type() {
        let json = r#"{"id": "tx_1", "amount": 5, "note": null, "timestamp": "x", "type": "transfer"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(txn.note, "");
        assert_eq!(txn.transaction_type, TransactionType::Unknown);
        assert!(txn.occurred_at().is_none());
    }

    #[test]
    fn test_type_parse() {
        assert_eq!(TransactionType::parse("Adjustment"), Some(TransactionType::Adjustment));
        assert_eq!(TransactionType::parse("all"), None);
        assert_eq!(TransactionType::Recurring.to_string(), "recurring");
    }
}
