//! Blocking HTTP plumbing for the probes.
//!
//! Probes talk to an [`HttpTransport`] rather than to libcurl directly, so the
//! same probe code runs against the real network ([`CurlTransport`]) and
//! against scripted responses in tests.

mod easy;
mod error;
mod parse;
#[cfg(test)]
pub(crate) mod scripted;

pub use easy::CurlTransport;
pub use error::{classify_curl_error, TransportError};

use std::time::Duration;

/// HTTP methods the checker issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
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

/// A single outgoing request. Bodies are always JSON.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Vec<u8>>,
    /// Total time allowed for the request, connect included.
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
            timeout,
        }
    }

    pub fn put_json(url: impl Into<String>, body: Vec<u8>, timeout: Duration) -> Self {
        Self {
            method: Method::Put,
            url: url.into(),
            body: Some(body),
            timeout,
        }
    }

    pub fn delete(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
            timeout,
        }
    }
}

/// Status, content type and full body of a completed exchange.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u32,
    /// `Content-Type` of the final response, if the server sent one.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body decoded as UTF-8, lossy.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and waits for the whole response or a transport failure.
///
/// Any HTTP status is a successful exchange; only network-level failures
/// (timeout, refused connection, DNS, TLS) are errors.
pub trait HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
