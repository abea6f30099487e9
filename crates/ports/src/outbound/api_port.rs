//! Transport-level errors for the admin API boundary

use thiserror::Error;

/// Errors raised by an HTTP adapter before the response envelope is inspected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Non-2xx status. `message` is the body's `message` field when it could be read.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    HttpError { status: u16, message: Option<String> },

    /// The response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// No bearer token is available from the session
    #[error("No active session")]
    MissingSession,
}

impl ApiError {
    /// Server-supplied message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::HttpError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
