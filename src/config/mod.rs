//! Configuration module for the finance panel
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PanelPaths;
pub use settings::Settings;
