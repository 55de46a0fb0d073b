//! All Records and Transactions CLI commands

use chrono::{NaiveDate, Utc};
use clap::Args;

use super::account::resolve_account;
use crate::display::records::{format_record_list, format_transaction_list};
use crate::error::{PanelError, PanelResult};
use crate::host::FinanceClient;
use crate::i18n::Translator;
use crate::models::timestamp::parse_date;
use crate::models::TransactionType;
use crate::records::{all_records, filter_transactions, DateRange, RecordsFilter, TransactionFilter};

/// Date window and search text shared by both views
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only records on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Only records on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,
    /// Case-insensitive text to look for in notes, titles, amounts and types
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn range(&self) -> PanelResult<DateRange> {
        Ok(DateRange {
            start: parse_bound(self.from.as_deref())?,
            end: parse_bound(self.until.as_deref())?,
        })
    }

    fn search_text(&self) -> String {
        self.search.clone().unwrap_or_default()
    }
}

fn parse_bound(raw: Option<&str>) -> PanelResult<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| {
            PanelError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", raw))
        }),
    }
}

#[derive(Args)]
pub struct RecordsArgs {
    /// Account name or ID
    pub account: String,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct TransactionsArgs {
    /// Account name or ID
    pub account: String,
    /// Only this type (manual, recurring, adjustment)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
    /// Number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Print the merged All Records view
pub fn handle_records_command(
    client: &mut FinanceClient,
    translator: &Translator,
    args: RecordsArgs,
) -> PanelResult<()> {
    let filter = RecordsFilter {
        range: args.filter.range()?,
        search: args.filter.search_text(),
    };
    let found = resolve_account(client, &args.account)?;
    let account = client.account(&found.id)?;

    let records = all_records(&account, &filter, translator, Utc::now());
    print!("{}", format_record_list(&records, translator));
    Ok(())
}

/// Print the Transactions view
pub fn handle_transactions_command(
    client: &mut FinanceClient,
    translator: &Translator,
    args: TransactionsArgs,
) -> PanelResult<()> {
    let mut filter = TransactionFilter::new()
        .range(args.filter.range()?)
        .search(args.filter.search_text());
    if let Some(kind) = &args.kind {
        let kind = TransactionType::parse(kind).ok_or_else(|| {
            PanelError::Validation(format!(
                "Invalid type: '{}'. Valid types: manual, recurring, adjustment",
                kind
            ))
        })?;
        filter = filter.kind(kind);
    }

    let found = resolve_account(client, &args.account)?;
    let account = client.account(&found.id)?;

    let mut transactions = filter_transactions(&account.transactions, &filter);
    if let Some(limit) = args.limit {
        transactions.truncate(limit);
    }
    print!("{}", format_transaction_list(&transactions, translator));
    Ok(())
}
