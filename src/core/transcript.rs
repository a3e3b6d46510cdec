use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::message::{Message, Role};

pub const USER_PREFIX: &str = "You";

/// Appends conversation turns to a plain-text file, mirroring what the
/// transcript pane shows.
#[derive(Debug, Default)]
pub struct TranscriptLog {
    file_path: Option<PathBuf>,
}

impl TranscriptLog {
    pub fn disabled() -> Self {
        Self { file_path: None }
    }

    /// Open (creating if needed) the file at `path` and write a session header.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let log = Self {
            file_path: Some(path),
        };
        log.write_block(&format!(
            "## Session started {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ))?;
        Ok(log)
    }

    pub fn is_active(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn record(&self, message: &Message) -> io::Result<()> {
        match message.role {
            Role::User => self.write_block(&format!("{USER_PREFIX}: {}", message.content)),
            Role::Assistant => self.write_block(&message.content),
        }
    }

    fn write_block(&self, content: &str) -> io::Result<()> {
        let Some(path) = self.file_path.as_ref() else {
            return Ok(());
        };

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        for line in content.lines() {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn disabled_log_writes_nothing() {
        let log = TranscriptLog::disabled();
        assert!(!log.is_active());
        log.record(&Message::user("hello")).expect("no-op");
    }

    #[test]
    fn records_turns_with_user_prefix_and_spacing() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("transcript.md");
        let log = TranscriptLog::open(&path).expect("open");

        log.record(&Message::user("What did I write about trains?"))
            .expect("user");
        log.record(&Message::assistant("You wrote two entries.\nBoth in May."))
            .expect("assistant");

        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.starts_with("## Session started "));
        assert!(contents.contains(
            "You: What did I write about trains?\n\nYou wrote two entries.\nBoth in May.\n\n"
        ));
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("missing").join("transcript.md");
        assert!(TranscriptLog::open(path).is_err());
    }
}
