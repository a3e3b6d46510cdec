use tracing::debug;

use super::{AppAction, AppCommand};
use crate::core::backend::NotesBackend;

/// Perform the backend call a command describes and return its completion action.
///
/// Failures never escape: every outcome is folded into the action's `result`.
pub async fn run_command(backend: &dyn NotesBackend, command: AppCommand) -> AppAction {
    debug!(?command, "Running backend command");
    match command {
        AppCommand::CheckStatus => AppAction::StatusChecked {
            result: backend.check_status().await,
        },
        AppCommand::SendChat { message } => AppAction::ChatCompleted {
            result: backend.send_chat(&message).await,
        },
        AppCommand::TriggerIndex => AppAction::SyncCompleted {
            result: backend.trigger_index().await,
        },
    }
}
