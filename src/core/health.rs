//! Backend readiness as reported by the one-shot status probe.

use crate::api::StatusResponse;
use crate::core::backend::BackendError;

pub const MODEL_LOADING: &str = "loading...";
pub const MODEL_UNKNOWN: &str = "unknown";
pub const MODEL_UNAVAILABLE: &str = "unavailable";

pub const CHECKING_MESSAGE: &str = "Checking backend status...";
pub const READY_MESSAGE: &str = "Backend ready";
pub const INITIALIZING_MESSAGE: &str = "Backend initializing";
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the backend.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthState {
    #[default]
    Checking,
    Ready {
        model_name: String,
    },
    Degraded {
        reason: String,
    },
    Unreachable {
        reason: String,
    },
}

impl HealthState {
    pub fn is_checking(&self) -> bool {
        matches!(self, HealthState::Checking)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, HealthState::Ready { .. })
    }

    /// Text shown next to the status badge.
    pub fn message(&self) -> &str {
        match self {
            HealthState::Checking => CHECKING_MESSAGE,
            HealthState::Ready { .. } => READY_MESSAGE,
            HealthState::Degraded { reason } | HealthState::Unreachable { reason } => reason,
        }
    }
}

/// Resolve a probe result into the health state and the model identity to display.
pub fn reconcile_status(result: Result<StatusResponse, BackendError>) -> (HealthState, String) {
    match result {
        Ok(status) => {
            let model_name = status
                .model_name
                .unwrap_or_else(|| MODEL_UNKNOWN.to_string());
            let health = if status.ready {
                HealthState::Ready {
                    model_name: model_name.clone(),
                }
            } else {
                HealthState::Degraded {
                    reason: status
                        .error
                        .unwrap_or_else(|| INITIALIZING_MESSAGE.to_string()),
                }
            };
            (health, model_name)
        }
        Err(err) => {
            let reason = match err {
                BackendError::Transport(text) => text,
                BackendError::Protocol { .. } => UNREACHABLE_MESSAGE.to_string(),
                BackendError::Payload(text) => format!("Unreadable status response: {text}"),
            };
            (
                HealthState::Unreachable { reason },
                MODEL_UNAVAILABLE.to_string(),
            )
        }
    }
}
