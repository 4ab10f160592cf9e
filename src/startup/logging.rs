//! File-backed `tracing` subscriber.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<local data dir>/mindspoke/mindspoke.log` instead of stdout.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Where the log ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogGuard {
    pub path: PathBuf,
}

/// Default log location, falling back to the temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mindspoke")
        .join("mindspoke.log")
}

/// Install the global subscriber writing to [`default_log_path`].
pub fn init_logging(config: &AppConfig) -> io::Result<LogGuard> {
    init_logging_at(&config.log_filter, &default_log_path())
}

/// Install the global subscriber writing to `path` (appending).
///
/// An invalid filter falls back to the default. Installing twice is not an
/// error; the first subscriber stays.
pub fn init_logging_at(filter: &str, path: &Path) -> io::Result<LogGuard> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Logging to {}", path.display());
    }

    Ok(LogGuard {
        path: path.to_path_buf(),
    })
}
