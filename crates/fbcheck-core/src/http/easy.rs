//! libcurl-backed transport (easy interface, one handle per request).

use super::{parse, HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use crate::config::CheckerConfig;
use std::str;
use std::time::Duration;

/// Sends requests with a fresh `curl::easy::Easy` per call.
///
/// No authentication headers are ever added; only the User-Agent and, for
/// requests with a body, `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    user_agent: String,
    connect_timeout: Duration,
}

impl CurlTransport {
    pub fn new(user_agent: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            connect_timeout,
        }
    }

    pub fn from_config(cfg: &CheckerConfig) -> Self {
        Self::new(cfg.user_agent.clone(), cfg.connect_timeout())
    }
}

impl HttpTransport for CurlTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout.min(request.timeout))?;
        easy.timeout(request.timeout)?;

        match request.method {
            Method::Get => easy.get(true)?,
            Method::Put | Method::Delete => easy.custom_request(request.method.as_str())?,
        }

        if let Some(payload) = &request.body {
            // Sets the body and length; the method stays as set by custom_request.
            easy.post_fields_copy(payload)?;
            let mut list = curl::easy::List::new();
            list.append("Content-Type: application/json")?;
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status,
            bytes = body.len(),
            "request completed"
        );

        Ok(HttpResponse {
            status,
            content_type: parse::content_type(&headers),
            body,
        })
    }
}
