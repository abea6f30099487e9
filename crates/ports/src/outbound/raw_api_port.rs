//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters implement this over a real HTTP client and attach the session's
//! bearer token to every call. Bodies come back as raw JSON; interpreting the
//! `{status, message, data}` envelope is the application layer's job.

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, FormPayload};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    /// GET `path` and return the JSON body.
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// POST a JSON body to `path` and return the JSON body.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST a multipart form to `path` and return the JSON body.
    ///
    /// Parts are sent in payload order; repeated names stay repeated parts.
    async fn post_multipart(&self, path: &str, form: &FormPayload) -> Result<Value, ApiError>;
}
