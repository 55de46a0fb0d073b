//! The All Records view: real transactions merged with one summary row per
//! active recurring plan, newest first.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::filter::{normalize_query, DateRange};
use crate::i18n::Translator;
use crate::models::{parse_timestamp, Account, Money};

/// Prefix that keeps synthesized plan rows apart from transaction ids
pub const PLAN_RECORD_PREFIX: &str = "plan_";

/// What a merged row stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Transaction,
    PlanSummary,
}

/// One row of the All Records view
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub id: String,
    /// Raw timestamp as shown when it cannot be parsed
    pub timestamp: String,
    pub occurred_at: Option<DateTime<Utc>>,
    pub amount: Money,
    pub label: String,
    pub kind: RecordKind,
    /// Localized type text ("Manual", "Recurring - Monthly", ...)
    pub display_type: String,
}

impl DisplayRecord {
    pub fn is_plan(&self) -> bool {
        self.kind == RecordKind::PlanSummary
    }

    fn matches(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(query)
            || self.amount.plain_string().contains(query)
            || self.display_type.to_lowercase().contains(query)
    }
}

/// Date window and search text for the All Records view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsFilter {
    pub range: DateRange,
    pub search: String,
}

/// Build the merged, sorted and filtered All Records list.
///
/// Plans without a `next_date` are placed at `now`. The account is only
/// borrowed; every call returns a fresh list.
pub fn all_records(
    account: &Account,
    filter: &RecordsFilter,
    translator: &Translator,
    now: DateTime<Utc>,
) -> Vec<DisplayRecord> {
    let mut records: Vec<DisplayRecord> = account
        .transactions
        .iter()
        .map(|txn| DisplayRecord {
            id: txn.id.clone(),
            timestamp: txn.timestamp.clone(),
            occurred_at: txn.occurred_at(),
            amount: txn.amount,
            label: txn.note.clone(),
            kind: RecordKind::Transaction,
            display_type: translator.t(txn.transaction_type.key()).to_string(),
        })
        .collect();

    let recurring = translator.t("recurring");
    records.extend(account.active_plans().map(|plan| {
        let (timestamp, occurred_at) = match plan.next_date.as_deref().filter(|d| !d.is_empty()) {
            Some(next) => (next.to_string(), parse_timestamp(next)),
            None => (now.to_rfc3339(), Some(now)),
        };
        DisplayRecord {
            id: format!("{}{}", PLAN_RECORD_PREFIX, plan.id),
            timestamp,
            occurred_at,
            amount: plan.amount,
            label: plan.title.clone(),
            kind: RecordKind::PlanSummary,
            display_type: format!("{} - {}", recurring, translator.t(plan.frequency.key())),
        }
    }));

    records.sort_by(|a, b| newest_first(a.occurred_at, b.occurred_at));

    records.retain(|r| filter.range.contains(r.occurred_at));
    if let Some(query) = normalize_query(&filter.search) {
        records.retain(|r| r.matches(&query));
    }

    records
}

/// Descending order with unreadable timestamps last
fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
