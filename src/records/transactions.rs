//! The Transactions tab: raw transactions only, most recently appended first.

use super::filter::{normalize_query, DateRange};
use crate::models::{Transaction, TransactionType};

/// Type, date and search filters for the Transactions tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// `None` shows every type
    pub kind: Option<TransactionType>,
    pub range: DateRange,
    pub search: String,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }
}

/// Apply the Transactions-tab filters.
///
/// Order is the reverse of stored order; timestamps are not re-sorted here.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let query = normalize_query(&filter.search);

    transactions
        .iter()
        .rev()
        .filter(|t| filter.kind.map_or(true, |kind| t.transaction_type == kind))
        .filter(|t| filter.range.contains(t.occurred_at()))
        .filter(|t| match &query {
            Some(q) => t.note.to_lowercase().contains(q) || t.amount.plain_string().contains(q),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn transactions() -> Vec<Transaction> {
        serde_json::from_str(
            r#"[
            {"id": "t1", "amount": 3000, "note": "Salary", "timestamp": "2024-01-01T09:00:00Z", "type": "manual"},
            {"id": "t2", "amount": -800, "note": "Rent", "timestamp": "2024-01-01T00:00:00Z", "type": "recurring", "plan_id": "p1"},
            {"id": "t3", "amount": 12.5, "note": "[Adjustment] bank fee refund", "timestamp": "2024-01-20T10:00:00Z", "type": "adjustment"},
            {"id": "t4", "amount": -4.25, "note": "coffee", "timestamp": "2024-01-15T08:00:00Z", "type": "manual"}
        ]"#,
        )
        .unwrap()
    }

    fn ids(list: &[&Transaction]) -> Vec<String> {
        list.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_reverse_stored_order() {
        let txns = transactions();
        let shown = filter_transactions(&txns, &TransactionFilter::new());
        assert_eq!(ids(&shown), vec!["t4", "t3", "t2", "t1"]);
    }

    #[test]
    fn test_type_filter() {
        let txns = transactions();
        let shown = filter_transactions(&txns, &TransactionFilter::new().kind(TransactionType::Manual));
        assert_eq!(ids(&shown), vec!["t4", "t1"]);
    }

    #[test]
    fn test_date_and_search_combine() {
        let txns = transactions();
        let filter = TransactionFilter::new()
            .range(DateRange::new().from(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()))
            .search("COFFEE");
        assert_eq!(ids(&filter_transactions(&txns, &filter)), vec!["t4"]);
    }

    #[test]
    fn test_search_by_amount() {
        let txns = transactions();
        let shown = filter_transactions(&txns, &TransactionFilter::new().search("12.5"));
        assert_eq!(ids(&shown), vec!["t3"]);
    }
}
