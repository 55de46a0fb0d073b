//! Record and transaction tables

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::i18n::{format_date, format_signed_amount, Translator};
use crate::models::Transaction;
use crate::records::DisplayRecord;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    label: String,
}

fn render_rows(rows: Vec<RecordRow>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::single(2), Alignment::right());
    format!("{}\n", table)
}

/// Merged All Records view
pub fn format_record_list(records: &[DisplayRecord], translator: &Translator) -> String {
    if records.is_empty() {
        return format!("{}.\n", translator.t("no_transactions"));
    }

    let language = translator.language();
    let rows = records
        .iter()
        .map(|r| RecordRow {
            date: format_date(r.occurred_at, &r.timestamp, language),
            kind: r.display_type.clone(),
            amount: format_signed_amount(r.amount),
            label: r.label.clone(),
        })
        .collect();
    render_rows(rows)
}

/// Transactions view, rows already filtered and ordered
pub fn format_transaction_list(transactions: &[&Transaction], translator: &Translator) -> String {
    if transactions.is_empty() {
        return format!("{}.\n", translator.t("no_transactions"));
    }

    let language = translator.language();
    let rows = transactions
        .iter()
        .map(|t| RecordRow {
            date: format_date(t.occurred_at(), &t.timestamp, language),
            kind: translator.t(t.transaction_type.key()).to_string(),
            amount: format_signed_amount(t.amount),
            label: t.note.clone(),
        })
        .collect();
    render_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::Account;
    use crate::records::{all_records, RecordsFilter};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn account() -> Account {
        serde_json::from_value(json!({
            "id": "checking", "name": "Checking", "balance": 1180,
            "transactions": [
                {"id": "tx_salary", "amount": 3000, "note": "salary", "timestamp": "2024-01-05", "type": "manual"},
                {"id": "tx_fix", "amount": 15, "note": "[Adjustment] interest", "timestamp": "2024-01-06", "type": "adjustment"}
            ],
            "recurring_plans": {
                "plan_rent": {"title": "Rent", "amount": -800, "frequency": "monthly", "next_date": "2024-02-01"}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_record_table_lists_plan_rows() {
        let translator = Translator::new(Language::English);
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let records = all_records(&account(), &RecordsFilter::default(), &translator, now);

        let output = format_record_list(&records, &translator);
        assert!(output.contains("Recurring - Monthly"));
        assert!(output.contains("+3,000.00"));
        assert!(output.contains("2/1/2024"));
    }

    #[test]
    fn test_transaction_table_is_localized() {
        let translator = Translator::new(Language::TraditionalChinese);
        let account = account();
        let refs: Vec<&Transaction> = account.transactions.iter().rev().collect();

        let output = format_transaction_list(&refs, &translator);
        assert!(output.contains("調整"));
        assert!(output.contains("2024/1/6"));
    }

    #[test]
    fn test_empty_tables() {
        let translator = Translator::new(Language::English);
        assert_eq!(format_record_list(&[], &translator), "No transactions yet.\n");
        assert_eq!(format_transaction_list(&[], &translator), "No transactions yet.\n");
    }
}
