//! Path management for the finance panel
//!
//! ## Path Resolution Order
//!
//! 1. `HA_FINANCE_PANEL_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/ha-finance-panel` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PanelError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "HA_FINANCE_PANEL_DIR";

/// Manages all paths used by the panel
#[derive(Debug, Clone)]
pub struct PanelPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl PanelPaths {
    /// Create a new PanelPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PanelError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PanelPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("panel.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PanelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PanelError::Io(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, PanelError> {
    ProjectDirs::from("io", "ha-finance", "ha-finance-panel")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PanelError::Config("Could not determine a home directory".into()))
}
