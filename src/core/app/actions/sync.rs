use tracing::{debug, info, warn};

use super::{App, AppAction, AppCommand};
use crate::core::sync::{reconcile_index, SyncState};

pub(super) fn handle_sync_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::TriggerSync => {
            if app.sync.is_pending() {
                debug!("Sync already in flight; ignoring trigger");
                return None;
            }
            app.sync = SyncState::Pending;
            Some(AppCommand::TriggerIndex)
        }
        AppAction::SyncCompleted { result } => {
            if !app.sync.is_pending() {
                warn!("Sync completion arrived with no sync in flight; ignoring");
                return None;
            }
            app.sync = reconcile_index(result);
            match &app.sync {
                SyncState::Succeeded { message } => info!(%message, "Sync succeeded"),
                SyncState::Failed { message } => warn!(%message, "Sync failed"),
                _ => {}
            }
            None
        }
        _ => unreachable!("non-sync action routed to sync handler"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IndexResponse;
    use crate::core::backend::BackendError;

    #[test]
    fn trigger_clears_previous_outcome() {
        let mut app = App::default();
        app.sync = SyncState::Failed {
            message: "Sync failed.".into(),
        };

        let command = handle_sync_action(&mut app, AppAction::TriggerSync);
        assert_eq!(command, Some(AppCommand::TriggerIndex));
        assert_eq!(app.sync, SyncState::Pending);
    }

    #[test]
    fn trigger_while_pending_issues_nothing() {
        let mut app = App::default();
        handle_sync_action(&mut app, AppAction::TriggerSync);
        assert_eq!(handle_sync_action(&mut app, AppAction::TriggerSync), None);
        assert_eq!(app.sync, SyncState::Pending);
    }

    #[test]
    fn repeated_syncs_overwrite_outcome() {
        let mut app = App::default();

        handle_sync_action(&mut app, AppAction::TriggerSync);
        handle_sync_action(
            &mut app,
            AppAction::SyncCompleted {
                result: Ok(IndexResponse {
                    message: None,
                    indexed: Some(2),
                }),
            },
        );
        assert_eq!(
            app.sync,
            SyncState::Succeeded {
                message: "Indexed 2 files.".into()
            }
        );

        handle_sync_action(&mut app, AppAction::TriggerSync);
        handle_sync_action(
            &mut app,
            AppAction::SyncCompleted {
                result: Err(BackendError::Protocol {
                    status: 500,
                    detail: None,
                }),
            },
        );
        assert_eq!(
            app.sync,
            SyncState::Failed {
                message: "Sync failed.".into()
            }
        );
    }

    #[test]
    fn sync_never_touches_the_message_log() {
        let mut app = App::default();
        handle_sync_action(&mut app, AppAction::TriggerSync);
        handle_sync_action(
            &mut app,
            AppAction::SyncCompleted {
                result: Err(BackendError::Transport("refused".into())),
            },
        );
        assert_eq!(app.messages.len(), 1);
    }
}
