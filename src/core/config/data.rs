use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const BACKEND_URL_ENV: &str = "NOTES_ASSISTANT_URL";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the notes backend (e.g., "http://localhost:8000")
    pub backend_url: Option<String>,
    /// Append every conversation turn to this file
    pub transcript_log: Option<PathBuf>,
}

/// Keys accepted by `set`/`unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BackendUrl,
    TranscriptLog,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::BackendUrl, ConfigKey::TranscriptLog];

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::BackendUrl => "backend-url",
            ConfigKey::TranscriptLog => "transcript-log",
        }
    }
}

impl Config {
    /// Resolve the backend URL: explicit flag, then environment, then file, then default.
    pub fn resolve_backend_url(&self, cli_url: Option<&str>) -> String {
        let env_url = std::env::var(BACKEND_URL_ENV).ok();
        resolve_url(cli_url, env_url.as_deref(), self.backend_url.as_deref())
    }

    pub fn set(&mut self, key: ConfigKey, value: String) {
        match key {
            ConfigKey::BackendUrl => self.backend_url = Some(value),
            ConfigKey::TranscriptLog => self.transcript_log = Some(PathBuf::from(value)),
        }
    }

    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::BackendUrl => self.backend_url = None,
            ConfigKey::TranscriptLog => self.transcript_log = None,
        }
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.backend_url {
            Some(url) => println!("  backend-url: {url}"),
            None => println!("  backend-url: (unset, default {DEFAULT_BACKEND_URL})"),
        }
        match &self.transcript_log {
            Some(path) => println!("  transcript-log: {}", path_display(path)),
            None => println!("  transcript-log: (unset)"),
        }
    }
}

fn resolve_url(cli_url: Option<&str>, env_url: Option<&str>, file_url: Option<&str>) -> String {
    [cli_url, env_url, file_url]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .to_string()
}

/// Get a user-friendly display string for a path, using `~` for the home
/// directory on Unix-like systems.
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

#[cfg(test)]
pub(super) fn resolve_url_for_test(
    cli_url: Option<&str>,
    env_url: Option<&str>,
    file_url: Option<&str>,
) -> String {
    resolve_url(cli_url, env_url, file_url)
}
