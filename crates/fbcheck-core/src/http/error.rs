//! Transport error type and curl error classification.

use thiserror::Error;

/// Network-level failure of a single request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within its timeout.
    #[error("Request timed out")]
    Timeout,
    /// DNS, connect, TLS, or the connection dropped mid-exchange.
    #[error("Connection error: {0}")]
    Connection(String),
    /// Anything else libcurl reported (bad URL, option failure, ...).
    #[error("{0}")]
    Other(String),
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        classify_curl_error(&e)
    }
}

/// Classify a curl error into timeout / connection / other.
pub fn classify_curl_error(e: &curl::Error) -> TransportError {
    if e.is_operation_timedout() {
        return TransportError::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportError::Connection(e.description().to_string());
    }
    TransportError::Other(e.to_string())
}
