//! Log output setup
//!
//! The page owns the terminal, so records go to a file in the local data
//! directory instead of stderr.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "blade_and_barrel=info,analytics=info";

const LOG_FILE_NAME: &str = "blade-and-barrel.log";

pub fn log_file_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "bladeandbarrel", "blade-and-barrel")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating parent directories
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber. Returns the log file in use, if any.
///
/// Without a writable log file nothing is installed and records are dropped.
pub fn init() -> Option<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path).ok()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Some(path)
}
