//! Tracing setup.
//!
//! The TUI owns stdout and the alternate screen, so while it runs every log
//! line goes to a file (`FOLIO_LOG_PATH`, or `<cache dir>/folio/folio.log`).
//! One-shot commands log to stderr. Both honour `RUST_LOG` and default to
//! `info`.

use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use dirs_next::{cache_dir, home_dir};
use tracing_subscriber::EnvFilter;

use crate::env::env_non_empty;

/// Environment variable used to override the TUI log file path.
pub const LOG_PATH_ENV: &str = "FOLIO_LOG_PATH";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "folio.log";

/// Where the TUI writes its log file.
pub fn resolve_log_path() -> PathBuf {
    if let Some(path) = env_non_empty(LOG_PATH_ENV) {
        return expand_home(&path);
    }
    cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join(LOG_FILE_NAME)
}

/// Route tracing output to `path`, creating parent directories as needed.
pub fn init_file_tracing(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Route tracing output to stderr.
pub fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn expand_home(path: &str) -> PathBuf {
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    match path {
        "~" => home(),
        _ => match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
            Some(rest) => home().join(rest),
            None => PathBuf::from(path),
        },
    }
}
