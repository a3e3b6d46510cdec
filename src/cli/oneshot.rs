//! TUI-less commands: `status`, `ask`, and `sync`.
//!
//! Each one drives the same reducer as the interactive session, runs its single
//! backend command inline, and prints the resulting state.

use std::io::{self, Write};

use crate::core::app::{apply_action, run_command, App, AppAction};
use crate::core::backend::NotesBackend;
use crate::core::sync::SyncState;
use crate::core::transcript::TranscriptLog;

/// Apply `action` and, if it requests a backend call, run it and apply the
/// completion. Returns whether the call succeeded, or `None` when the action
/// was gated and nothing was sent.
async fn settle(app: &mut App, backend: &dyn NotesBackend, action: AppAction) -> Option<bool> {
    let command = apply_action(app, action)?;
    let completion = run_command(backend, command).await;
    let succeeded = match &completion {
        AppAction::StatusChecked { result } => result.is_ok(),
        AppAction::ChatCompleted { result } => result.is_ok(),
        AppAction::SyncCompleted { result } => result.is_ok(),
        _ => false,
    };
    apply_action(app, completion);
    Some(succeeded)
}

/// Probe the backend once. Returns whether it reported ready.
pub async fn run_status<W: Write>(backend: &dyn NotesBackend, out: &mut W) -> io::Result<bool> {
    let mut app = App::default();
    settle(&mut app, backend, AppAction::ProbeStatus).await;

    writeln!(out, "Status: {}", app.health.message())?;
    writeln!(out, "Model: {}", app.model_identity)?;
    Ok(app.health.is_ready())
}

/// Send one question and print the assistant's turn. Returns whether the
/// backend answered; failures still print the apology turn.
pub async fn run_ask<W: Write>(
    backend: &dyn NotesBackend,
    question: &str,
    transcript: TranscriptLog,
    out: &mut W,
) -> io::Result<bool> {
    let mut app = App::new(transcript);
    apply_action(
        &mut app,
        AppAction::SetDraft {
            text: question.to_string(),
        },
    );

    let Some(answered) = settle(&mut app, backend, AppAction::SubmitDraft).await else {
        writeln!(out, "Nothing to ask.")?;
        return Ok(false);
    };

    if let Some(reply) = app.messages.last() {
        writeln!(out, "{}", reply.content)?;
    }
    Ok(answered)
}

/// Trigger a re-index and print its outcome. Returns whether it succeeded.
pub async fn run_sync<W: Write>(backend: &dyn NotesBackend, out: &mut W) -> io::Result<bool> {
    let mut app = App::default();
    settle(&mut app, backend, AppAction::TriggerSync).await;

    if let Some(message) = app.sync.outcome_message() {
        writeln!(out, "{message}")?;
    }
    Ok(matches!(app.sync, SyncState::Succeeded { .. }))
}
