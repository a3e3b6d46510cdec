//! Diagnostic logging setup.
//!
//! Log records go to a file, never to stdout or stderr, so they cannot
//! corrupt the full-screen interface.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::io::project_dirs;

pub const LOG_FILE_NAME: &str = "notes-assistant.log";

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
///
/// When no log file can be opened, logging is disabled rather than sent to the terminal.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (log_file, init_warnings) = open_log_file(log_file_candidates());

    if let Some((log_path, file)) = log_file {
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .try_init();
        if installed.is_ok() {
            tracing::info!(path = %log_path.display(), "Logging initialized");
            for warning in init_warnings {
                tracing::warn!("{warning}");
            }
        }
        return;
    }

    let _ = tracing_subscriber::registry().with(env_filter).try_init();
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dirs) = project_dirs() {
        candidates.push(dirs.data_dir().join("logs").join(LOG_FILE_NAME));
    }
    candidates.push(std::env::temp_dir().join(LOG_FILE_NAME));
    candidates
}

/// Open the first candidate that works, collecting a warning for each that does not.
fn open_log_file(candidates: Vec<PathBuf>) -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in candidates {
        match open_append(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => warnings.push(format!(
                "Failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }

    (None, warnings)
}

fn open_append(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
