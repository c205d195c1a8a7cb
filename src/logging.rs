//! File logging via `tracing-subscriber`.
//!
//! The terminal belongs to the TUI, so log output goes to a file. Nothing is
//! installed unless a filter is configured (`ASSIGNMATE_LOG`).

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// `<cache dir>/assignmate/assignmate.log`, when a cache dir exists.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("assignmate").join("assignmate.log"))
}

/// Where logs go for `config`: the override, else the default.
pub fn resolve_log_path(config: &AppConfig) -> Option<PathBuf> {
    config.log_file.clone().or_else(default_log_path)
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Install the global subscriber. Returns the log path when logging is on.
pub fn init_logging(config: &AppConfig) -> Result<Option<PathBuf>> {
    let Some(filter) = config.log_filter.as_deref() else {
        return Ok(None);
    };
    let Some(path) = resolve_log_path(config) else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    let env_filter = EnvFilter::try_new(filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(Some(path))
}
