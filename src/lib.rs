//! notes-assistant is a terminal client for a notes question-answering backend.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the session state: backend health, the message log, the
//!   chat and sync request lifecycles, and the pure view projection. All
//!   transitions go through [`core::app::apply_action`].
//! - [`api`] defines the backend's JSON payloads and the HTTP adapter that
//!   implements [`core::backend::NotesBackend`].
//! - [`ui`] renders the terminal interface and runs the interactive event loop.
//! - [`cli`] parses arguments and dispatches to the interactive session or the
//!   one-shot `status`, `ask`, and `sync` commands.
//! - [`utils`] holds URL helpers and logging setup.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
