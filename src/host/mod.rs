//! Host communication
//!
//! The host owns all finance state. The panel sends `ha_finance/*` requests
//! and reads back result payloads; there are no retries or timeouts.

pub mod channel;
pub mod client;
pub mod process;
pub mod request;

pub use channel::HostChannel;
pub use client::{FinanceClient, PlanFields};
pub use process::{JsonLinesChannel, ProcessChannel};
pub use request::HostRequest;
