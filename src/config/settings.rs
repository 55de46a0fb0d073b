//! User settings for the finance panel
//!
//! Manages the host bridge command, display language, chart window and
//! logging level.

use serde::{Deserialize, Serialize};

use super::paths::PanelPaths;
use crate::error::PanelError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Host language tag (e.g. "en", "zh-Hant", "zh-CN")
    #[serde(default = "default_language")]
    pub language: String,

    /// Number of months requested for the income/expense chart
    #[serde(default = "default_chart_months")]
    pub chart_months: u32,

    /// Command (program followed by arguments) that bridges to the host
    #[serde(default)]
    pub host_command: Vec<String>,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_language() -> String {
    "en".to_string()
}

fn default_chart_months() -> u32 {
    6
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            language: default_language(),
            chart_months: default_chart_months(),
            host_command: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PanelPaths) -> Result<Self, PanelError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PanelError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PanelError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PanelPaths) -> Result<(), PanelError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PanelError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PanelError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Split the bridge command into program and arguments
    pub fn host_program(&self) -> Result<(&str, &[String]), PanelError> {
        match self.host_command.split_first() {
            Some((program, args)) if !program.trim().is_empty() => Ok((program.as_str(), args)),
            _ => Err(PanelError::Config(
                "No host_command configured; set it in config.json or pass --host".into(),
            )),
        }
    }
}
