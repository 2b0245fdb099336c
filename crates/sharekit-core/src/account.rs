//! The owning account/session context.

use crate::config::ClientConfig;

/// Read-only session context authorizing every dispatched request.
///
/// One `Account` is shared (behind an `Arc`) by the manager and by
/// every entity it creates; no component mutates it. The token is an
/// opaque capability; this crate never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    base_url: String,
    token: Option<String>,
}

impl Account {
    /// Create an account context for a server.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, token }
    }

    /// Build an account context from the client configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.server.base_url.clone(), config.server.token.clone())
    }

    /// The base server URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The capability token, if the session carries one.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The absolute URL of a sharing API endpoint.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, endpoint)
    }
}
