//! The seam between gateways and the network.
//!
//! Gateways build an [`ApiRequest`] relative to the merchant root and hand it
//! to a [`Transport`]. The transport owns credentials, base URL and timeouts;
//! it reports the raw status and decoded JSON body and leaves the mapping of
//! statuses to faults to the gateway layer.

use serde_json::Value;

use crate::error::BraintreeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call against the merchant API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below `/merchants/<id>`, starting with `/`.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body,
        }
    }
}

/// Raw result of a call: status plus the JSON body, if any was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes [`ApiRequest`]s.
///
/// Implementations return `Err` only when no HTTP response was obtained
/// (connection failure, timeout, undecodable body). Every status code,
/// including 4xx and 5xx, comes back as `Ok`.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BraintreeError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BraintreeError>> + Send {
        (**self).execute(request)
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BraintreeError>> + Send {
        (**self).execute(request)
    }
}
