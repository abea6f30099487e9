//! Test doubles shared by the wizard and edit form tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};

use confdesk_ports::{ApiError, FormPayload, RawApiPort};

use crate::application::dto::CREATE_CONFERENCE_BASIC_INFO_PATH;

/// Admin API that never answers the listed calls (zero-based) and succeeds on
/// every other one.
pub(crate) struct StallingApi {
    stall_on: Vec<usize>,
    calls: AtomicUsize,
}

impl StallingApi {
    pub(crate) fn stalling_on(calls: &[usize]) -> Self {
        Self {
            stall_on: calls.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self, path: &str) -> Result<Value, ApiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.stall_on.contains(&call) {
            std::future::pending::<()>().await;
        }
        if path == CREATE_CONFERENCE_BASIC_INFO_PATH {
            Ok(json!({"status": "success", "data": {"token": "abc123"}}))
        } else {
            Ok(json!({"status": "success"}))
        }
    }
}

#[async_trait]
impl RawApiPort for StallingApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.respond(path).await
    }

    async fn post_json(&self, path: &str, _body: &Value) -> Result<Value, ApiError> {
        self.respond(path).await
    }

    async fn post_multipart(&self, path: &str, _form: &FormPayload) -> Result<Value, ApiError> {
        self.respond(path).await
    }
}
