use tracing::{debug, info};

use super::{App, AppAction, AppCommand};
use crate::core::health::reconcile_status;

pub(super) fn handle_status_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::ProbeStatus => {
            if app.probe_started {
                debug!("Status probe already issued; ignoring");
                return None;
            }
            app.probe_started = true;
            Some(AppCommand::CheckStatus)
        }
        AppAction::StatusChecked { result } => {
            if !app.health.is_checking() {
                debug!("Status already resolved; ignoring late probe result");
                return None;
            }
            let (health, model_identity) = reconcile_status(result);
            info!(status = health.message(), model = %model_identity, "Backend status resolved");
            app.health = health;
            app.model_identity = model_identity;
            None
        }
        _ => unreachable!("non-status action routed to status handler"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StatusResponse;
    use crate::core::backend::BackendError;
    use crate::core::health::{HealthState, MODEL_LOADING, MODEL_UNAVAILABLE};

    #[test]
    fn probe_is_issued_once() {
        let mut app = App::default();
        assert_eq!(
            handle_status_action(&mut app, AppAction::ProbeStatus),
            Some(AppCommand::CheckStatus)
        );
        assert_eq!(handle_status_action(&mut app, AppAction::ProbeStatus), None);
        assert!(app.health.is_checking());
        assert_eq!(app.model_identity, MODEL_LOADING);
    }

    #[test]
    fn first_result_wins() {
        let mut app = App::default();
        handle_status_action(
            &mut app,
            AppAction::StatusChecked {
                result: Ok(StatusResponse {
                    model_name: Some("llama3".into()),
                    ready: true,
                    error: None,
                }),
            },
        );
        handle_status_action(
            &mut app,
            AppAction::StatusChecked {
                result: Err(BackendError::Transport("refused".into())),
            },
        );
        assert_eq!(
            app.health,
            HealthState::Ready {
                model_name: "llama3".into()
            }
        );
        assert_eq!(app.model_identity, "llama3");
    }

    #[test]
    fn connection_refused_marks_model_unavailable() {
        let mut app = App::default();
        handle_status_action(
            &mut app,
            AppAction::StatusChecked {
                result: Err(BackendError::Transport("connection refused".into())),
            },
        );
        assert!(matches!(app.health, HealthState::Unreachable { .. }));
        assert_eq!(app.model_identity, MODEL_UNAVAILABLE);
    }
}
