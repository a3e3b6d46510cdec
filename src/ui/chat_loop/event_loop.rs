//! Event polling, dispatching, and UI rendering loop.
//!
//! Terminal input is read on a dedicated task and forwarded over a channel.
//! Each loop iteration draws if needed, maps pending key presses to actions,
//! applies queued actions to the shared [`App`], and spawns the backend
//! calls those actions request. Completions re-enter through the same queue.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tracing::debug;

use crate::core::app::{apply_actions, run_command, App, AppAction, AppActionDispatcher, AppCommand};
use crate::core::backend::NotesBackend;
use crate::core::transcript::TranscriptLog;
use crate::ui::renderer::ui;

use super::keybindings::map_key_event;
use super::lifecycle::{restore_terminal, setup_terminal, SharedTerminal};
use super::AppHandle;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn spawn_backend_command(
    backend: Arc<dyn NotesBackend>,
    dispatcher: AppActionDispatcher,
    command: AppCommand,
) {
    tokio::spawn(async move {
        let completion = run_command(backend.as_ref(), command).await;
        dispatcher.dispatch(completion);
    });
}

async fn drain_action_queue(
    app: &AppHandle,
    backend: &Arc<dyn NotesBackend>,
    dispatcher: &AppActionDispatcher,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(action) = action_rx.try_recv() {
        pending.push(action);
    }

    if pending.is_empty() {
        return false;
    }

    let commands = app.update(|app| apply_actions(app, pending)).await;
    for command in commands {
        spawn_backend_command(backend.clone(), dispatcher.clone(), command);
    }
    true
}

/// Forward pending terminal events to the dispatcher. Returns whether any
/// event arrived.
fn process_ui_events(
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
) -> bool {
    let mut processed = false;
    while let Ok(UiEvent::Crossterm(event)) = event_rx.try_recv() {
        processed = true;
        if let Event::Key(key) = event {
            if let Some(action) = map_key_event(key) {
                dispatcher.dispatch(action);
            }
        }
    }
    processed
}

async fn try_draw_frame(
    app: &AppHandle,
    terminal: &SharedTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let mut terminal_guard = terminal.lock().await;
    app.update(|app| terminal_guard.draw(|f| ui(f, app)).map(|_| ()))
        .await?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

/// Run the interactive session until the user quits.
pub async fn run_chat(
    backend: Arc<dyn NotesBackend>,
    transcript: TranscriptLog,
) -> Result<(), Box<dyn Error>> {
    let app = AppHandle::new(App::new(transcript));

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let dispatcher = AppActionDispatcher::new(action_tx);
    dispatcher.dispatch(AppAction::ProbeStatus);

    let terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    const MAX_FPS: u64 = 60;
    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;

    let result = loop {
        if app.read(|app| app.ui.exit_requested).await {
            debug!("Exit requested");
            break Ok(());
        }

        if let Err(e) = try_draw_frame(
            &app,
            &terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        )
        .await
        {
            break Err(e.into());
        }

        let events_processed = process_ui_events(&mut event_rx, &dispatcher);
        if events_processed {
            request_redraw = true;
        }

        let actions_applied =
            drain_action_queue(&app, &backend, &dispatcher, &mut action_rx).await;
        if actions_applied {
            request_redraw = true;
        }

        if !events_processed && !actions_applied && !request_redraw {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();
    restore_terminal(&terminal).await?;

    result
}
