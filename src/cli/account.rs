//! Account CLI commands

use clap::Subcommand;

use crate::display::account::{format_account_details, format_account_list};
use crate::error::{PanelError, PanelResult};
use crate::host::FinanceClient;
use crate::i18n::Translator;
use crate::models::AccountSummary;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List all accounts with balances
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    client: &mut FinanceClient,
    translator: &Translator,
    cmd: AccountCommands,
) -> PanelResult<()> {
    match cmd {
        AccountCommands::List => {
            let accounts = client.accounts()?;
            print!("{}", format_account_list(&accounts));
        }

        AccountCommands::Show { account } => {
            let found = resolve_account(client, &account)?;
            let detail = client.account(&found.id)?;
            print!("{}", format_account_details(&detail, translator));
        }
    }

    Ok(())
}

/// Find an account by exact id, then by case-insensitive name
pub fn resolve_account(client: &mut FinanceClient, query: &str) -> PanelResult<AccountSummary> {
    let accounts = client.accounts()?;
    find_account(accounts, query).ok_or_else(|| PanelError::account_not_found(query))
}

fn find_account(accounts: Vec<AccountSummary>, query: &str) -> Option<AccountSummary> {
    let query = query.trim();
    let lowered = query.to_lowercase();
    let by_id = accounts.iter().position(|a| a.id == query);
    let index = by_id.or_else(|| accounts.iter().position(|a| a.name.to_lowercase() == lowered))?;
    accounts.into_iter().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::channel::mock::MockChannel;
    use crate::models::Money;
    use serde_json::json;

    fn summary(id: &str, name: &str) -> AccountSummary {
        AccountSummary {
            id: id.into(),
            name: name.into(),
            balance: Money::zero(),
        }
    }

    #[test]
    fn test_find_by_id_before_name() {
        let accounts = vec![summary("cash", "Wallet"), summary("wallet", "Cash")];
        assert_eq!(find_account(accounts.clone(), "cash").map(|a| a.id), Some("cash".into()));
        assert_eq!(find_account(accounts, "CASH").map(|a| a.id), Some("wallet".into()));
    }

    #[test]
    fn test_resolve_unknown_account() {
        let mock = MockChannel::new();
        mock.respond(json!({"accounts": [{"id": "checking", "name": "Checking", "balance": 0}]}));
        let mut client = FinanceClient::new(Box::new(mock));

        let err = resolve_account(&mut client, "savings").unwrap_err();
        assert_eq!(err.to_string(), "Account not found: savings");
    }
}
