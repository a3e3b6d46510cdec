//! Main chat event loop and terminal lifecycle.
//!
//! The loop owns the [`App`] behind an [`AppHandle`], turns key presses into
//! [`crate::core::app::AppAction`]s, and runs every backend command on its
//! own Tokio task so the interface keeps drawing while requests are in flight.

mod event_loop;
mod keybindings;
mod lifecycle;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::app::App;

pub use event_loop::run_chat;
pub use keybindings::map_key_event;

/// Shared access to the session state for the loop and its tasks.
#[derive(Clone)]
pub struct AppHandle {
    inner: Arc<Mutex<App>>,
}

impl AppHandle {
    pub fn new(app: App) -> Self {
        Self {
            inner: Arc::new(Mutex::new(app)),
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&App) -> R) -> R {
        let guard = self.inner.lock().await;
        f(&guard)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut App) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }
}
