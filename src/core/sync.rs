//! Re-index lifecycle, independent of the conversation.

use crate::api::IndexResponse;
use crate::core::backend::BackendError;

pub const SYNC_FALLBACK_DETAIL: &str = "Sync failed.";
pub const UNREADABLE_SYNC_DETAIL: &str = "Received an unreadable response from the backend.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Pending,
    Succeeded {
        message: String,
    },
    Failed {
        message: String,
    },
}

impl SyncState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SyncState::Pending)
    }

    /// The banner text of a terminal outcome.
    pub fn outcome_message(&self) -> Option<&str> {
        match self {
            SyncState::Succeeded { message } | SyncState::Failed { message } => Some(message),
            SyncState::Idle | SyncState::Pending => None,
        }
    }
}

/// Resolve an index call into its terminal state.
pub fn reconcile_index(result: Result<IndexResponse, BackendError>) -> SyncState {
    match result {
        Ok(response) => {
            let message = response
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("Indexed {} files.", response.indexed.unwrap_or(0)));
            SyncState::Succeeded { message }
        }
        Err(err) => {
            let message = match err {
                BackendError::Transport(text) => text,
                BackendError::Protocol { detail, .. } => {
                    detail.unwrap_or_else(|| SYNC_FALLBACK_DETAIL.to_string())
                }
                BackendError::Payload(_) => UNREADABLE_SYNC_DETAIL.to_string(),
            };
            SyncState::Failed { message }
        }
    }
}
