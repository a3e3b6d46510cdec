use tracing::{debug, info, warn};

use super::{App, AppAction, AppCommand};
use crate::core::chat::{can_send, reply_message, ChatRequestState};
use crate::core::message::Message;

pub(super) fn handle_chat_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitDraft => submit_draft(app),
        AppAction::ChatCompleted { result } => {
            if !app.chat_state.is_pending() {
                warn!("Chat completion arrived with no request in flight; ignoring");
                return None;
            }
            match &result {
                Ok(_) => info!("Chat reply received"),
                Err(e) => warn!(error = %e, "Chat request failed"),
            }
            app.append_message(reply_message(result));
            app.chat_state = ChatRequestState::Idle;
            None
        }
        _ => unreachable!("non-chat action routed to chat handler"),
    }
}

/// Accept the draft if the canSend gate allows it.
///
/// The user turn is appended and the draft cleared before the request is
/// handed back as a command, so it is visible ahead of any reply.
fn submit_draft(app: &mut App) -> Option<AppCommand> {
    if !can_send(&app.draft, app.chat_state) {
        debug!(
            pending = app.chat_state.is_pending(),
            "Submission gated; ignoring"
        );
        return None;
    }

    let message = app.draft.text().trim().to_string();
    app.draft.clear();
    app.append_message(Message::user(message.clone()));
    app.chat_state = ChatRequestState::Pending;
    Some(AppCommand::SendChat { message })
}
