//! Transport trait for dispatching sharing API requests.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::account::Account;
use crate::result::ShareResult;

/// Method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One asynchronous request against the sharing API.
///
/// Parameters ride in the query string for `Get` requests and in the
/// JSON body otherwise; the exact wire encoding belongs to the
/// transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Request method.
    pub method: ApiMethod,
    /// Endpoint path relative to the API root (e.g. `shares/42`).
    pub endpoint: String,
    /// Request parameters.
    pub params: Map<String, Value>,
}

impl ApiRequest {
    /// Create a request with no parameters.
    pub fn new(method: ApiMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: Map::new(),
        }
    }

    /// Create a GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(ApiMethod::Get, endpoint)
    }

    /// Create a POST request.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(ApiMethod::Post, endpoint)
    }

    /// Create a PUT request.
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(ApiMethod::Put, endpoint)
    }

    /// Create a DELETE request.
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(ApiMethod::Delete, endpoint)
    }

    /// Add a parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Trait for dispatching requests against the remote sharing service.
///
/// The transport owns the wire format: it authorizes the request with
/// the account, encodes the parameters, and decodes the response
/// envelope into either the success payload or a
/// [`ShareError`](crate::ShareError) carrying the numeric code and
/// message the server (or the transport itself) reported. A dispatched
/// request runs to completion; there is no cancellation.
///
/// The trait is defined here in `sharekit-core` and implemented by the
/// client crate's HTTP transport and by test doubles.
#[async_trait]
pub trait ShareTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Dispatch one request and resolve to its decoded success payload.
    async fn dispatch(&self, account: &Account, request: ApiRequest) -> ShareResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_builder() {
        let request = ApiRequest::post("shares")
            .param("path", "/docs")
            .param("share_type", 3);
        assert_eq!(request.method, ApiMethod::Post);
        assert_eq!(request.params.get("path"), Some(&Value::from("/docs")));
        assert_eq!(request.params.get("share_type"), Some(&Value::from(3)));
    }
}
