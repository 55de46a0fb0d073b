//! Derived record views
//!
//! Pure functions from an account snapshot plus filter settings to the rows a
//! view displays. Nothing here talks to the host.

pub mod all_records;
pub mod filter;
pub mod transactions;

pub use all_records::{all_records, DisplayRecord, RecordKind, RecordsFilter, PLAN_RECORD_PREFIX};
pub use filter::{normalize_query, DateRange};
pub use transactions::{filter_transactions, TransactionFilter};
