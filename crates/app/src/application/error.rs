//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! covering transport failures, non-2xx statuses, and `{status, message, data}`
//! envelopes that did not report success.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use confdesk_ports::{ApiError, Notification};

use crate::application::dto::ApiEnvelope;

/// Shown whenever the failure carries no usable server message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport or HTTP-level failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP 200, but the envelope status was not `success`
    #[error("Server error: {}", message.as_deref().unwrap_or("request was not successful"))]
    Server { message: Option<String> },

    /// Response was missing data the caller needs
    #[error("Server returned empty response")]
    EmptyResponse,

    /// Failed to parse response data
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A required field was blank; no request was made
    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    /// Text for the user-facing notification.
    ///
    /// Server-supplied messages win; everything else falls back to
    /// [`GENERIC_ERROR_MESSAGE`]. Validation errors carry their own text.
    pub fn user_message(&self) -> String {
        let server_message = match self {
            ServiceError::Api(e) => e.server_message(),
            ServiceError::Server { message } => message.as_deref(),
            ServiceError::Validation(msg) => return msg.clone(),
            ServiceError::EmptyResponse | ServiceError::ParseError(_) => None,
        };
        server_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string()
    }

    pub fn to_notification(&self) -> Notification {
        Notification::error(self.user_message())
    }
}

/// Helper trait for interpreting a raw JSON body as an API envelope
pub trait ParseEnvelope {
    /// Parse the envelope's `data` into the expected type
    fn parse_data<T: DeserializeOwned>(self) -> Result<T, ServiceError>;

    /// Check for success when no data is expected. Returns the envelope message.
    fn parse_ack(self) -> Result<Option<String>, ServiceError>;
}

impl ParseEnvelope for Value {
    fn parse_data<T: DeserializeOwned>(self) -> Result<T, ServiceError> {
        let envelope = ApiEnvelope::from_value(self)?;
        let data = envelope.into_success()?.data;
        let data = data.ok_or(ServiceError::EmptyResponse)?;
        serde_json::from_value(data).map_err(|e| ServiceError::ParseError(e.to_string()))
    }

    fn parse_ack(self) -> Result<Option<String>, ServiceError> {
        let envelope = ApiEnvelope::from_value(self)?;
        Ok(envelope.into_success()?.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_data_returns_typed_data() {
        #[derive(serde::Deserialize)]
        struct Token {
            token: String,
        }

        let body = json!({"status": "success", "data": {"token": "abc123"}});
        let token: Token = body.parse_data().unwrap();
        assert_eq!(token.token, "abc123");
    }

    #[test]
    fn non_success_status_keeps_message() {
        let body = json!({"status": "error", "message": "title taken"});
        let err = body.parse_data::<Value>().unwrap_err();
        assert_eq!(
            err,
            ServiceError::Server {
                message: Some("title taken".into())
            }
        );
        assert_eq!(err.user_message(), "title taken");
    }

    #[test]
    fn missing_data_is_empty_response() {
        let body = json!({"status": "success"});
        assert_eq!(
            body.parse_data::<Value>().unwrap_err(),
            ServiceError::EmptyResponse
        );
    }

    #[test]
    fn parse_ack_returns_message() {
        let body = json!({"status": "success", "message": "Conference created"});
        assert_eq!(body.parse_ack().unwrap(), Some("Conference created".into()));
    }

    #[test]
    fn user_message_falls_back_to_generic() {
        let cases = [
            ServiceError::Api(ApiError::RequestFailed("connection refused".into())),
            ServiceError::Api(ApiError::HttpError {
                status: 500,
                message: None,
            }),
            ServiceError::Server { message: None },
            ServiceError::Server {
                message: Some("  ".into()),
            },
            ServiceError::EmptyResponse,
            ServiceError::ParseError("eof".into()),
        ];
        for err in cases {
            assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE, "{err:?}");
        }
    }

    #[test]
    fn http_error_message_is_preferred() {
        let err = ServiceError::from(ApiError::HttpError {
            status: 401,
            message: Some("Unauthenticated.".into()),
        });
        assert_eq!(err.user_message(), "Unauthenticated.");
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = ServiceError::Validation("Title is required".into());
        let notification = err.to_notification();
        assert_eq!(notification, Notification::error("Title is required"));
    }
}
