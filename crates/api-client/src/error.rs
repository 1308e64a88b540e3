//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Text shown whenever a request never produced a readable response.
pub const CONNECTION_ERROR: &str = "Error connecting to server";

/// Failure modes of a REST call.
///
/// Transport and decode problems collapse to one generic user-facing
/// message; non-2xx responses carry whatever `error` text the server
/// provided, with 404 kept distinct so lookups can special-case it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure, or an unreadable success body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A failure body that was not JSON.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 404 response.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("Request failed: {0}")]
    Request(String),
}

impl ClientError {
    /// Builds the error for a non-2xx response from its status and raw body.
    /// Failure bodies are expected to be `{"error": "..."}`; a 404 short-
    /// circuits before body inspection so it survives even a bodyless reply.
    pub fn from_response_parts(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            return ClientError::NotFound(extract_error_text(body).unwrap_or_default());
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => ClientError::Request(
                value
                    .get("error")
                    .and_then(|text| text.as_str())
                    .unwrap_or_default()
                    .to_string(),
            ),
            Err(err) => ClientError::Decode(err),
        }
    }

    /// The text a view should display for this failure: the generic
    /// connection message for transport/decode problems, otherwise the
    /// server-provided text or the caller's per-action fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Http(_) | ClientError::Decode(_) => CONNECTION_ERROR.to_string(),
            ClientError::NotFound(text) | ClientError::Request(text) => {
                if text.is_empty() {
                    fallback.to_string()
                } else {
                    text.clone()
                }
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

fn extract_error_text(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    Some(value.get("error")?.as_str()?.to_string())
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
