//! Renderable state derived from the session, with no access to I/O.

use crate::core::chat::{can_send, ChatRequestState, PromptDraft};
use crate::core::health::HealthState;
use crate::core::message::Message;
use crate::core::sync::SyncState;

pub const THINKING_PLACEHOLDER: &str = "Thinking...";
pub const SYNC_LABEL: &str = "Sync & Re-index Notes";
pub const SYNC_PENDING_LABEL: &str = "Syncing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Nominal,
    Warning,
    Error,
}

impl BadgeVariant {
    pub fn for_health(health: &HealthState) -> Self {
        match health {
            HealthState::Ready { .. } => BadgeVariant::Nominal,
            HealthState::Checking | HealthState::Degraded { .. } => BadgeVariant::Warning,
            HealthState::Unreachable { .. } => BadgeVariant::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncBannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncBanner {
    pub kind: SyncBannerKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub badge: BadgeVariant,
    pub status_message: String,
    pub model_identity: String,
    /// The log followed by a transient "Thinking..." turn while a chat request is pending.
    pub transcript: Vec<Message>,
    pub draft: String,
    pub can_submit: bool,
    pub sync_enabled: bool,
    pub sync_label: &'static str,
    pub sync_banner: Option<SyncBanner>,
}

impl View {
    pub fn project(
        health: &HealthState,
        model_identity: &str,
        messages: &[Message],
        chat_state: ChatRequestState,
        draft: &PromptDraft,
        sync: &SyncState,
    ) -> Self {
        let mut transcript = messages.to_vec();
        if chat_state.is_pending() {
            transcript.push(Message::assistant(THINKING_PLACEHOLDER));
        }

        let sync_banner = match sync {
            SyncState::Succeeded { message } => Some(SyncBanner {
                kind: SyncBannerKind::Success,
                message: message.clone(),
            }),
            SyncState::Failed { message } => Some(SyncBanner {
                kind: SyncBannerKind::Error,
                message: message.clone(),
            }),
            SyncState::Idle | SyncState::Pending => None,
        };

        Self {
            badge: BadgeVariant::for_health(health),
            status_message: health.message().to_string(),
            model_identity: model_identity.to_string(),
            transcript,
            draft: draft.text(),
            can_submit: can_send(draft, chat_state),
            sync_enabled: !sync.is_pending(),
            sync_label: if sync.is_pending() {
                SYNC_PENDING_LABEL
            } else {
                SYNC_LABEL
            },
            sync_banner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::health::CHECKING_MESSAGE;
    use crate::core::message::{MessageLog, Role};

    fn project_with(
        health: &HealthState,
        chat_state: ChatRequestState,
        draft_text: &str,
        sync: &SyncState,
    ) -> View {
        let log = MessageLog::seeded();
        let mut draft = PromptDraft::new();
        draft.set_text(draft_text);
        View::project(health, "llama3", log.snapshot(), chat_state, &draft, sync)
    }

    #[test]
    fn badge_variants_follow_health() {
        assert_eq!(
            BadgeVariant::for_health(&HealthState::Checking),
            BadgeVariant::Warning
        );
        assert_eq!(
            BadgeVariant::for_health(&HealthState::Ready {
                model_name: "m".into()
            }),
            BadgeVariant::Nominal
        );
        assert_eq!(
            BadgeVariant::for_health(&HealthState::Degraded {
                reason: "r".into()
            }),
            BadgeVariant::Warning
        );
        assert_eq!(
            BadgeVariant::for_health(&HealthState::Unreachable {
                reason: "r".into()
            }),
            BadgeVariant::Error
        );
    }

    #[test]
    fn placeholder_only_while_pending() {
        let idle = project_with(
            &HealthState::Checking,
            ChatRequestState::Idle,
            "",
            &SyncState::Idle,
        );
        assert_eq!(idle.transcript.len(), 1);
        assert_eq!(idle.status_message, CHECKING_MESSAGE);

        let pending = project_with(
            &HealthState::Checking,
            ChatRequestState::Pending,
            "",
            &SyncState::Idle,
        );
        assert_eq!(pending.transcript.len(), 2);
        let placeholder = pending.transcript.last().expect("placeholder");
        assert_eq!(placeholder.role, Role::Assistant);
        assert_eq!(placeholder.content, THINKING_PLACEHOLDER);
    }

    #[test]
    fn submit_flag_tracks_gate() {
        let idle = project_with(
            &HealthState::Checking,
            ChatRequestState::Idle,
            "question",
            &SyncState::Idle,
        );
        assert!(idle.can_submit);

        let pending = project_with(
            &HealthState::Checking,
            ChatRequestState::Pending,
            "question",
            &SyncState::Idle,
        );
        assert!(!pending.can_submit);
        assert_eq!(pending.draft, "question");
    }

    #[test]
    fn sync_control_disabled_while_pending() {
        let pending = project_with(
            &HealthState::Checking,
            ChatRequestState::Idle,
            "",
            &SyncState::Pending,
        );
        assert!(!pending.sync_enabled);
        assert_eq!(pending.sync_label, SYNC_PENDING_LABEL);
        assert_eq!(pending.sync_banner, None);

        let failed = project_with(
            &HealthState::Checking,
            ChatRequestState::Idle,
            "",
            &SyncState::Failed {
                message: "Sync failed.".into(),
            },
        );
        assert!(failed.sync_enabled);
        assert_eq!(failed.sync_label, SYNC_LABEL);
        assert_eq!(
            failed.sync_banner,
            Some(SyncBanner {
                kind: SyncBannerKind::Error,
                message: "Sync failed.".into()
            })
        );
    }
}
