//! Diagnostic logging
//!
//! The TUI owns the terminal, so log records go to an append-only file in the
//! config directory instead of stderr.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::{PanelPaths, Settings};
use crate::error::{PanelError, PanelResult};

/// Initialise the global logger writing to `panel.log`.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless;
/// the second call leaves the first logger in place.
pub fn init_file_logger(paths: &PanelPaths, settings: &Settings) -> PanelResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| PanelError::Io(format!("Failed to open log file: {}", e)))?;

    let env = Env::default().default_filter_or(settings.log_level.as_str());
    let result = Builder::from_env(env)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::info!(
            "logging to {} (language={}, chart_months={})",
            paths.log_file().display(),
            settings.language,
            settings.chart_months
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PanelPaths::with_base_dir(temp_dir.path().join("cfg"));

        init_file_logger(&paths, &Settings::default()).unwrap();
        init_file_logger(&paths, &Settings::default()).unwrap();

        assert!(paths.log_file().exists());
    }
}
