use serde::Deserialize;
use serde_json::Value;

use crate::application::error::ServiceError;

/// The `{status, message, data}` wrapper every admin API response follows.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiEnvelope {
    pub const SUCCESS: &'static str = "success";

    pub fn from_value(value: Value) -> Result<Self, ServiceError> {
        serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(Self::SUCCESS)
    }

    /// Any status other than `success` (including a missing one) is a failure.
    pub fn into_success(self) -> Result<Self, ServiceError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ServiceError::Server {
                message: self.message,
            })
        }
    }
}
