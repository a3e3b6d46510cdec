//! Chat request gating and reply reconciliation.

use tui_textarea::{CursorMove, Input, TextArea};

use crate::core::backend::BackendError;
use crate::core::message::Message;

pub const APOLOGY_PREFIX: &str = "Sorry, I couldn't answer that.";
pub const CHAT_FALLBACK_DETAIL: &str = "Unable to get a response.";
pub const UNREADABLE_REPLY_DETAIL: &str = "Received an unreadable response from the backend.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatRequestState {
    #[default]
    Idle,
    Pending,
}

impl ChatRequestState {
    pub fn is_pending(self) -> bool {
        self == ChatRequestState::Pending
    }
}

/// The text the user is composing, bound to the input box.
#[derive(Debug, Clone, Default)]
pub struct PromptDraft {
    textarea: TextArea<'static>,
}

impl PromptDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.trim().is_empty())
    }

    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        self.textarea = TextArea::new(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
    }

    /// Feed one key to the editor. Returns whether the text changed.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        self.textarea.input(input)
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

/// The canSend gate.
pub fn can_send(draft: &PromptDraft, state: ChatRequestState) -> bool {
    !draft.is_blank() && !state.is_pending()
}

/// User-facing detail text for a failed chat request.
pub fn failure_detail(err: &BackendError) -> String {
    match err {
        BackendError::Transport(text) => text.clone(),
        BackendError::Protocol { detail, .. } => detail
            .clone()
            .unwrap_or_else(|| CHAT_FALLBACK_DETAIL.to_string()),
        BackendError::Payload(_) => UNREADABLE_REPLY_DETAIL.to_string(),
    }
}

/// The assistant turn that answers a submitted prompt, success or not.
pub fn reply_message(result: Result<String, BackendError>) -> Message {
    match result {
        Ok(reply) => Message::assistant(reply),
        Err(err) => Message::assistant(format!("{APOLOGY_PREFIX} {}", failure_detail(&err))),
    }
}
