//! Optional session log.
//!
//! While the TUI owns the terminal nothing can be printed to stderr, so
//! diagnostics are appended to a log file instead. Logging is off until
//! [`init`] or [`init_at`] is called; [`log`] is a no-op before that.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::distr::Alphanumeric;
use rand::Rng;
use thiserror::Error;

static SESSION_LOG: OnceLock<Mutex<File>> = OnceLock::new();

/// Errors that can occur while opening the session log.
#[derive(Error, Debug)]
pub enum SessionLogError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session log already initialized")]
    AlreadyInitialized,
}

/// Builds a log file name with a random suffix, e.g. `protcompare-x3Zk91Qa.log`.
pub fn random_log_name() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("protcompare-{}.log", suffix)
}

/// Opens a fresh log file in the system temp directory.
///
/// Returns the path of the created file.
pub fn init() -> Result<PathBuf, SessionLogError> {
    let path = std::env::temp_dir().join(random_log_name());
    init_at(&path)?;
    Ok(path)
}

/// Opens (or appends to) the log file at `path`.
pub fn init_at(path: &Path) -> Result<(), SessionLogError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| SessionLogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    SESSION_LOG
        .set(Mutex::new(file))
        .map_err(|_| SessionLogError::AlreadyInitialized)
}

/// Returns true once a log file is open.
pub fn is_enabled() -> bool {
    SESSION_LOG.get().is_some()
}

/// Appends one line to the session log, prefixed with a Unix timestamp.
///
/// Write errors are ignored: logging never interrupts a comparison.
pub fn log(args: fmt::Arguments<'_>) {
    let Some(lock) = SESSION_LOG.get() else {
        return;
    };
    let Ok(mut file) = lock.lock() else {
        return;
    };
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let _ = writeln!(file, "[{}] {}", secs, args);
}
