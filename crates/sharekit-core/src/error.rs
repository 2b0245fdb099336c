//! Unified error types for ShareKit.
//!
//! All crates map their internal errors into [`ShareError`] for
//! consistent propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The request never produced a response (connection, TLS, timeout).
    Transport,
    /// The server rejected the request.
    Server,
    /// The server requires a password for link shares; retry with one.
    PasswordRequired,
    /// The response arrived but could not be decoded into entities.
    MalformedResponse,
    /// Input validation failed before dispatch.
    Validation,
    /// A configuration error occurred.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "TRANSPORT"),
            Self::Server => write!(f, "SERVER"),
            Self::PasswordRequired => write!(f, "PASSWORD_REQUIRED"),
            Self::MalformedResponse => write!(f, "MALFORMED_RESPONSE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified error used throughout ShareKit.
///
/// Transport failures and server rejections share one shape: a kind, an
/// optional numeric code (the HTTP status or a transport-assigned
/// code), and a human-readable message a presentation layer can render
/// as-is. The SDK never retries on its own; every error is local to the
/// single operation that produced it.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ShareError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Numeric code reported by the server or transport, when there is one.
    pub code: Option<u16>,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ShareError {
    /// Create a new error without a numeric code.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a transport-failure error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a server-rejection error carrying the status code.
    pub fn server(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Server,
            code: Some(code),
            message: message.into(),
            source: None,
        }
    }

    /// Create a password-required error (legacy-server link share shim).
    pub fn password_required(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::PasswordRequired,
            code: Some(403),
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for ShareError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            code: self.code,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::MalformedResponse,
            format!("JSON decoding error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for ShareError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
