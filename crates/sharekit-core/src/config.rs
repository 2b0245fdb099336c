//! Client configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with an environment-variable overlay.

use serde::{Deserialize, Serialize};

use crate::error::ShareError;
use crate::events::DEFAULT_EVENT_BUFFER;

/// Root client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Remote server settings.
    pub server: ServerConfig,
    /// HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Event bus settings.
    #[serde(default)]
    pub events: EventsConfig,
}

/// Remote sharing server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the sharing server.
    pub base_url: String,
    /// Opaque capability token authorizing requests.
    #[serde(default)]
    pub token: Option<String>,
}

/// HTTP transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// User-Agent header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Event bus settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Buffer size for the event broadcast channel.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific
    /// overlay and environment variables prefixed with `SHAREKIT_`.
    pub fn load(env: &str) -> Result<Self, ShareError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHAREKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ShareError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| ShareError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("sharekit/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_channel_buffer() -> usize {
    DEFAULT_EVENT_BUFFER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_defaults() {
        let http = HttpConfig::default();
        assert_eq!(http.connect_timeout_seconds, 10);
        assert_eq!(http.request_timeout_seconds, 30);
        assert!(http.user_agent.starts_with("sharekit/"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "server": { "base_url": "https://files.example.com" }
        }))
        .unwrap();
        assert_eq!(config.server.token, None);
        assert_eq!(config.events.channel_buffer_size, DEFAULT_EVENT_BUFFER);
    }
}
