mod chat;
mod input;
mod status;
mod sync;

use tokio::sync::mpsc;
use tui_textarea::Input;

use super::App;
use crate::api::{IndexResponse, StatusResponse};
use crate::core::backend::BackendError;

#[derive(Debug)]
pub enum AppAction {
    ProbeStatus,
    StatusChecked {
        result: Result<StatusResponse, BackendError>,
    },
    DraftInput {
        input: Input,
    },
    SetDraft {
        text: String,
    },
    SubmitDraft,
    ChatCompleted {
        result: Result<String, BackendError>,
    },
    TriggerSync,
    SyncCompleted {
        result: Result<IndexResponse, BackendError>,
    },
    ScrollUp {
        lines: u16,
    },
    ScrollDown {
        lines: u16,
    },
    Quit,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction) {
        let _ = self.tx.send(action);
    }

    pub fn dispatch_many<I>(&self, actions: I)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }
}

/// Side effects requested by the reducer. Each one is a single backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    CheckStatus,
    SendChat { message: String },
    TriggerIndex,
}

pub fn apply_actions(app: &mut App, actions: impl IntoIterator<Item = AppAction>) -> Vec<AppCommand> {
    actions
        .into_iter()
        .filter_map(|action| apply_action(app, action))
        .collect()
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::ProbeStatus | AppAction::StatusChecked { .. } => {
            status::handle_status_action(app, action)
        }

        AppAction::SubmitDraft | AppAction::ChatCompleted { .. } => {
            chat::handle_chat_action(app, action)
        }

        AppAction::TriggerSync | AppAction::SyncCompleted { .. } => {
            sync::handle_sync_action(app, action)
        }

        AppAction::DraftInput { .. }
        | AppAction::SetDraft { .. }
        | AppAction::ScrollUp { .. }
        | AppAction::ScrollDown { .. }
        | AppAction::Quit => input::handle_input_action(app, action),
    }
}
