use serde::{Deserialize, Serialize};

pub mod client;

pub use client::HttpBackend;

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    #[serde(default)]
    pub model_name: Option<String>,
    pub ready: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of a successful `POST /api/index`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IndexResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub indexed: Option<u64>,
}

/// Error body shared by the chat and index endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Extracts a non-empty `detail` string from a failure body, if it parses.
pub fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.is_empty())
}
