//! The owned session state and its transition functions.
//!
//! [`App`] is the single source of truth for one client session. It is only
//! ever mutated through [`apply_action`]; side effects leave the reducer as
//! [`AppCommand`]s and come back as completion [`AppAction`]s.

use tracing::warn;

use crate::core::chat::{ChatRequestState, PromptDraft};
use crate::core::health::{HealthState, MODEL_LOADING};
use crate::core::message::{Message, MessageLog};
use crate::core::sync::SyncState;
use crate::core::transcript::TranscriptLog;
use crate::core::view::View;

pub mod actions;
pub mod executor;
pub mod ui_state;

pub use actions::{
    apply_action, apply_actions, AppAction, AppActionDispatcher, AppCommand,
};
pub use executor::run_command;
pub use ui_state::UiState;

pub struct App {
    pub health: HealthState,
    pub model_identity: String,
    pub messages: MessageLog,
    pub chat_state: ChatRequestState,
    pub draft: PromptDraft,
    pub sync: SyncState,
    pub transcript: TranscriptLog,
    pub ui: UiState,
    probe_started: bool,
}

impl App {
    pub fn new(transcript: TranscriptLog) -> Self {
        let app = Self {
            health: HealthState::Checking,
            model_identity: MODEL_LOADING.to_string(),
            messages: MessageLog::seeded(),
            chat_state: ChatRequestState::Idle,
            draft: PromptDraft::new(),
            sync: SyncState::Idle,
            transcript,
            ui: UiState::default(),
            probe_started: false,
        };
        if let Some(greeting) = app.messages.last() {
            app.record_transcript(greeting);
        }
        app
    }

    pub fn view(&self) -> View {
        View::project(
            &self.health,
            &self.model_identity,
            self.messages.snapshot(),
            self.chat_state,
            &self.draft,
            &self.sync,
        )
    }

    /// Append a turn to the log and mirror it to the transcript file.
    pub(crate) fn append_message(&mut self, message: Message) {
        self.record_transcript(&message);
        self.messages.append(message);
        self.ui.follow_latest();
    }

    fn record_transcript(&self, message: &Message) {
        if let Err(e) = self.transcript.record(message) {
            warn!(error = %e, "Failed to write transcript");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(TranscriptLog::disabled())
    }
}
