//! Core data models for the finance panel
//!
//! These mirror what the host sends over the wire: account summaries, full
//! account detail with transactions and recurring plans, and chart totals.

pub mod account;
pub mod chart;
pub mod money;
pub mod plan;
pub mod timestamp;
pub mod transaction;

pub use account::{Account, AccountSummary};
pub use chart::{ChartDataPoint, ChartScale};
pub use money::{Money, MoneyParseError};
pub use plan::{Frequency, RecurringPlan};
pub use timestamp::parse_timestamp;
pub use transaction::{Transaction, TransactionType};
