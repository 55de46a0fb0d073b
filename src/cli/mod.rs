//! CLI command handlers
//!
//! Read-only views of the host's data for scripts and quick checks, bridging
//! the clap argument parsing with the host client.

pub mod account;
pub mod records;

pub use account::{handle_account_command, resolve_account, AccountCommands};
pub use records::{
    handle_records_command, handle_transactions_command, FilterArgs, RecordsArgs,
    TransactionsArgs,
};
