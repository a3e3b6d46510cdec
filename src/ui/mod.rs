//! Terminal UI layer for the interactive session.
//!
//! - [`chat_loop`]: terminal setup, input polling, and the loop that feeds
//!   key presses into [`crate::core::app::apply_action`] and runs the
//!   resulting backend commands on Tokio tasks.
//! - [`renderer`]: draws a [`crate::core::view::View`] as the sidebar and
//!   chat pane.
//! - [`theme`]: the color choices shared by the renderer.
//! - [`wrap`]: word wrapping for transcript rows.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the session rules and backend coordination.

pub mod chat_loop;
pub mod renderer;
pub mod theme;
pub mod wrap;
