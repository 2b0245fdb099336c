//! Default HTTP transport over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use sharekit_core::account::Account;
use sharekit_core::config::HttpConfig;
use sharekit_core::traits::{ApiMethod, ApiRequest, ShareTransport};
use sharekit_core::{ShareError, ShareResult};

/// Dispatches sharing API requests over HTTP.
///
/// Wire contract: bearer-token authorization, JSON request bodies
/// (query parameters for GET), a `{"success": true, "data": ...}`
/// success envelope, and an `{"error": ..., "message": ...}` error envelope
/// whose numeric code is the HTTP status.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with default HTTP settings.
    pub fn new() -> ShareResult<Self> {
        Self::from_config(&HttpConfig::default())
    }

    /// Build a transport from the HTTP configuration section.
    pub fn from_config(config: &HttpConfig) -> ShareResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                ShareError::configuration(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ShareTransport for HttpTransport {
    async fn dispatch(&self, account: &Account, request: ApiRequest) -> ShareResult<Value> {
        let url = account.api_url(&request.endpoint);
        let mut builder = match request.method {
            ApiMethod::Get => self.http.get(&url),
            ApiMethod::Post => self.http.post(&url),
            ApiMethod::Put => self.http.put(&url),
            ApiMethod::Delete => self.http.delete(&url),
        };

        if let Some(token) = account.token() {
            builder = builder.bearer_auth(token);
        }

        if !request.params.is_empty() {
            builder = match request.method {
                ApiMethod::Get => {
                    let query: Vec<(String, String)> = request
                        .params
                        .iter()
                        .map(|(key, value)| {
                            let value = match value {
                                Value::String(text) => text.clone(),
                                other => other.to_string(),
                            };
                            (key.clone(), value)
                        })
                        .collect();
                    builder.query(&query)
                }
                _ => builder.json(&Value::Object(request.params)),
            };
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ShareError::transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ShareError::transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("server returned status {status}"));
            return Err(ShareError::server(status.as_u16(), message));
        }

        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| ShareError::malformed(format!("unreadable response body: {e}")))?
        };

        Ok(body.get("data").cloned().unwrap_or(Value::Null))
    }
}
