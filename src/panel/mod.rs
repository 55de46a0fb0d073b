//! Panel view-model
//!
//! Owns the state the UI renders and the actions that talk to the host.

pub mod actions;
pub mod forms;
pub mod state;

pub use actions::{Panel, DEFAULT_CHART_MONTHS};
pub use forms::{
    delete_confirmation_matches, AccountDraft, AdjustmentDraft, PlanDraft, TransactionDraft,
};
pub use state::{Modal, PanelState, Tab};
