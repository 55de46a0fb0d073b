//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::i18n::{format_amount, format_date, format_signed_amount, Translator};
use crate::models::{Account, AccountSummary, Money};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[AccountSummary]) -> String {
    if summaries.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let rows = summaries.iter().map(|s| AccountRow {
        id: s.id.clone(),
        name: s.name.clone(),
        balance: format_amount(s.balance),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::single(2), Alignment::right());

    let total = summaries
        .iter()
        .fold(Money::zero(), |sum, s| sum + s.balance);

    format!("{}\nTOTAL: {}\n", table, format_amount(total))
}

/// Format a single account's details
pub fn format_account_details(account: &Account, translator: &Translator) -> String {
    let language = translator.language();
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:           {}\n", account.id));
    output.push_str(&format!(
        "  {}:      {}\n",
        translator.t("balance"),
        format_amount(account.balance)
    ));
    output.push_str(&format!("  Transactions: {}\n", account.transactions.len()));
    output.push_str(&format!(
        "  Plans:        {} ({} active)\n",
        account.recurring_plans.len(),
        account.active_plans().count()
    ));

    if let Some(last) = account.last_transaction() {
        output.push('\n');
        output.push_str(&format!(
            "  {}: {} {} ({})\n",
            translator.t("last_transaction"),
            format_signed_amount(last.amount),
            last.note,
            format_date(last.occurred_at(), &last.timestamp, language)
        ));
    }

    if !account.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", account.notes));
    }

    output
}
