//! Admin API client over reqwest

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use confdesk_ports::{ApiError, FormPayload, FormValue, RawApiPort, SessionPort};

use super::config::ClientConfig;

/// [`RawApiPort`] implementation that talks to the admin REST API.
///
/// Every request carries `Authorization: Bearer <token>` from the session. No
/// request is made while signed out.
#[derive(Clone)]
pub struct HttpApiAdapter {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionPort>,
}

impl HttpApiAdapter {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionPort>) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.session.bearer_token().ok_or(ApiError::MissingSession)?;
        Ok(request.bearer_auth(token))
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = self.authorized(request)?.send().await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Admin API request failed");
            ApiError::RequestFailed(e.to_string())
        })?;
        read_response(path, response).await
    }
}

/// Convert the transport-neutral payload, keeping part order and repeated names.
fn to_multipart(payload: &FormPayload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for part in payload.parts() {
        form = match &part.value {
            FormValue::Text(value) => form.text(part.name.clone(), value.clone()),
            FormValue::File(file) => {
                let body = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.content_type)
                    .map_err(|e| {
                        ApiError::SerializeError(format!("{}: {}", file.file_name, e))
                    })?;
                form.part(part.name.clone(), body)
            }
        };
    }
    Ok(form)
}

/// The `message` field of an error body, if the body is a JSON object with one.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

async fn read_response(path: &str, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if !status.is_success() {
        let message = error_message(&body);
        tracing::warn!(
            path = %path,
            status = %status,
            server_message = message.as_deref().unwrap_or(""),
            "Admin API returned error status"
        );
        return Err(ApiError::HttpError {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(path = %path, error = %e, "Admin API returned non-JSON body");
        ApiError::ParseError(e.to_string())
    })
}

#[async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path = %path, "GET");
        let request = self.client.get(self.url(path));
        self.send(path, request).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path = %path, "POST json");
        let request = self.client.post(self.url(path)).json(body);
        self.send(path, request).await
    }

    async fn post_multipart(&self, path: &str, form: &FormPayload) -> Result<Value, ApiError> {
        tracing::debug!(path = %path, parts = form.len(), "POST multipart");
        let request = self.client.post(self.url(path)).multipart(to_multipart(form)?);
        self.send(path, request).await
    }
}
