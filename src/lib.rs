//! HA Finance Panel - terminal account management for Home Assistant
//!
//! This library implements an account-management panel for the Home Assistant
//! finance record integration. The host owns all data; the panel lists
//! accounts, shows transactions and recurring plans, records new entries and
//! adjusts balances by calling the host over a JSON-lines bridge.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Host data models (accounts, transactions, plans, chart data)
//! - `host`: Request/response channel and the typed host client
//! - `records`: Filtering and merging for the record views
//! - `panel`: Panel state, forms and host-backed actions
//! - `i18n`: Display strings and amount/date formatting
//! - `display`: Table formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use ha_finance_panel::config::{PanelPaths, Settings};
//! use ha_finance_panel::host::{FinanceClient, ProcessChannel};
//!
//! let paths = PanelPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut client = FinanceClient::new(Box::new(ProcessChannel::from_settings(&settings)?));
//! let accounts = client.accounts()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod host;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod panel;
pub mod records;
pub mod tui;

pub use error::{PanelError, PanelResult};
