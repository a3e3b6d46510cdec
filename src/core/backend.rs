//! The side-effecting seam between the controller and the notes backend.
//!
//! Everything in [`crate::core`] except this trait is pure state transition.
//! The interactive loop and the one-shot CLI commands both talk to the
//! backend exclusively through [`NotesBackend`], which lets tests swap the
//! HTTP adapter for an in-memory fake.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::{IndexResponse, StatusResponse};

/// Why a single backend call did not produce a usable body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The request never got an HTTP response (connection refused, DNS, reset).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}")]
    Protocol { status: u16, detail: Option<String> },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unreadable response body: {0}")]
    Payload(String),
}

impl BackendError {
    /// The `detail` string the backend sent with a failure, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BackendError::Protocol { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[async_trait]
pub trait NotesBackend: Send + Sync {
    /// `GET /api/status`
    async fn check_status(&self) -> Result<StatusResponse, BackendError>;

    /// `POST /api/chat`, returning the reply text.
    async fn send_chat(&self, message: &str) -> Result<String, BackendError>;

    /// `POST /api/index`
    async fn trigger_index(&self) -> Result<IndexResponse, BackendError>;
}
