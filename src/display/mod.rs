//! Display formatting for terminal output
//!
//! Tables and detail blocks for the non-interactive commands.

pub mod account;
pub mod records;

pub use account::{format_account_details, format_account_list};
pub use records::{format_record_list, format_transaction_list};
