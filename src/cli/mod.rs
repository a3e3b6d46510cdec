//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments, resolves the backend URL and
//! transcript file, and dispatches to the interactive session or one of the
//! one-shot commands.

pub mod oneshot;

use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::api::HttpBackend;
use crate::cli::oneshot::{run_ask, run_status, run_sync};
use crate::core::config::data::BACKEND_URL_ENV;
use crate::core::config::{path_display, Config, ConfigKey};
use crate::core::transcript::TranscriptLog;
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::init_tracing;

#[derive(Parser)]
#[command(name = "notes-assistant")]
#[command(about = "A terminal client for asking questions about your notes")]
#[command(
    long_about = "notes-assistant is a full-screen terminal client for a notes question-answering \
backend. Ask questions in natural language, watch the backend's readiness, and trigger a \
re-index after adding new notes.\n\n\
Backend URL (first match wins):\n\
  --url <URL>            Command-line flag\n\
  NOTES_ASSISTANT_URL    Environment variable\n\
  backend-url            Configuration file key (see 'notes-assistant set')\n\
  http://localhost:8000  Built-in default\n\n\
Controls:\n\
  Type              Enter your question in the input field\n\
  Enter             Send the question\n\
  Alt+Enter         Insert a new line\n\
  Ctrl+S            Sync & re-index notes\n\
  PageUp/PageDown   Scroll through the conversation\n\
  Ctrl+C or Esc     Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the notes backend
    #[arg(short = 'u', long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Append the conversation to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Check whether the backend is ready and which model it serves
    Status,
    /// Ask a single question and print the answer
    Ask {
        /// The question (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        question: Vec<String>,
    },
    /// Re-index the notes folder
    Sync,
    /// Set configuration values
    Set {
        /// Configuration key to set (backend-url, transcript-log)
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Show the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing();

    let config = Config::load()?;
    let backend_url = config.resolve_backend_url(args.url.as_deref());
    tracing::debug!(%backend_url, "Resolved backend URL");

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let transcript = open_transcript(args.log.as_deref(), &config)?;
            let backend = Arc::new(HttpBackend::new(&backend_url));
            run_chat(backend, transcript).await
        }
        Commands::Status => {
            let backend = HttpBackend::new(&backend_url);
            let ready = run_status(&backend, &mut io::stdout()).await?;
            if !ready {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Ask { question } => {
            let transcript = open_transcript(args.log.as_deref(), &config)?;
            let backend = HttpBackend::new(&backend_url);
            let answered =
                run_ask(&backend, &question.join(" "), transcript, &mut io::stdout()).await?;
            if !answered {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Sync => {
            let backend = HttpBackend::new(&backend_url);
            let synced = run_sync(&backend, &mut io::stdout()).await?;
            if !synced {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            let Some(config_key) = parse_key(&key) else {
                std::process::exit(1);
            };
            if value.is_empty() {
                config.print_all();
                return Ok(());
            }
            let value = value.join(" ");
            let mut config = config;
            config.set(config_key, value.clone());
            config.save()?;
            println!("✅ Set {} to: {value}", config_key.as_str());
            Ok(())
        }
        Commands::Unset { key } => {
            let Some(config_key) = parse_key(&key) else {
                std::process::exit(1);
            };
            let mut config = config;
            config.unset(config_key);
            config.save()?;
            println!("✅ Unset {}", config_key.as_str());
            Ok(())
        }
        Commands::Config => {
            config.print_all();
            println!("  (config file: {})", path_display(Config::config_path()?));
            if std::env::var_os(BACKEND_URL_ENV).is_some() {
                println!("  ({BACKEND_URL_ENV} is set and overrides backend-url)");
            }
            Ok(())
        }
    }
}

fn parse_key(key: &str) -> Option<ConfigKey> {
    let parsed = ConfigKey::parse(key);
    if parsed.is_none() {
        let valid: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
        eprintln!("❌ Unknown config key: {key}");
        eprintln!("Valid keys: {}", valid.join(", "));
    }
    parsed
}

/// The transcript file named by `--log`, else by the config file, else none.
pub fn open_transcript(cli_path: Option<&Path>, config: &Config) -> io::Result<TranscriptLog> {
    match cli_path.or(config.transcript_log.as_deref()) {
        Some(path) => TranscriptLog::open(path),
        None => Ok(TranscriptLog::disabled()),
    }
}

#[cfg(test)]
mod tests;
