use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{parse_error_detail, ChatRequest, ChatResponse, IndexResponse, StatusResponse};
use crate::core::backend::{BackendError, NotesBackend};
use crate::utils::url::{endpoint_url, normalize_base_url};

pub const STATUS_ENDPOINT: &str = "api/status";
pub const CHAT_ENDPOINT: &str = "api/chat";
pub const INDEX_ENDPOINT: &str = "api/index";

/// reqwest adapter for the notes backend's HTTP API.
///
/// No timeouts or retries are configured; each call resolves exactly once with
/// either a body or a [`BackendError`].
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    async fn read_body<T: DeserializeOwned>(
        response: reqwest::Response,
        endpoint: &str,
    ) -> Result<T, BackendError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !status.is_success() {
            debug!(endpoint, status = status.as_u16(), "Backend returned failure status");
            return Err(BackendError::Protocol {
                status: status.as_u16(),
                detail: parse_error_detail(&body),
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            debug!(endpoint, error = %e, "Backend returned malformed body");
            BackendError::Payload(e.to_string())
        })
    }
}

#[async_trait]
impl NotesBackend for HttpBackend {
    async fn check_status(&self) -> Result<StatusResponse, BackendError> {
        let url = endpoint_url(&self.base_url, STATUS_ENDPOINT);
        debug!(%url, "Checking backend status");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Self::read_body(response, STATUS_ENDPOINT).await
    }

    async fn send_chat(&self, message: &str) -> Result<String, BackendError> {
        let url = endpoint_url(&self.base_url, CHAT_ENDPOINT);
        debug!(%url, chars = message.chars().count(), "Sending chat request");
        let request = ChatRequest {
            message: message.to_string(),
        };
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let reply: ChatResponse = Self::read_body(response, CHAT_ENDPOINT).await?;
        Ok(reply.response)
    }

    async fn trigger_index(&self) -> Result<IndexResponse, BackendError> {
        let url = endpoint_url(&self.base_url, INDEX_ENDPOINT);
        debug!(%url, "Triggering re-index");
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Self::read_body(response, INDEX_ENDPOINT).await
    }
}
