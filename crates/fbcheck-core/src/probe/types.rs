//! Result types recorded by the probes.

use super::inspect::DataSummary;

/// What a successful read exchange looked like.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadObservation {
    pub status_code: u32,
    /// HTTP 200: the rules let an anonymous client read this path.
    pub accessible: bool,
    pub response_size: usize,
    /// `Content-Type` header, or `"unknown"`.
    pub content_type: String,
    /// Present only for HTTP 200 with a non-empty body.
    pub data: Option<DataSummary>,
}

/// Outcome of one read probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeResult {
    Observed(ReadObservation),
    /// Timeout, connection failure or other transport error.
    Error(String),
}

impl ProbeResult {
    pub fn accessible(&self) -> bool {
        matches!(self, ProbeResult::Observed(o) if o.accessible)
    }

    /// `Some` only when the body was inspected.
    pub fn has_data(&self) -> Option<bool> {
        match self {
            ProbeResult::Observed(o) => o.data.as_ref().map(|d| d.has_data),
            ProbeResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProbeResult::Error(e) => Some(e),
            ProbeResult::Observed(_) => None,
        }
    }
}

/// A read probe result tagged with the endpoint that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResult {
    /// Relative probe path, e.g. `/.json?shallow=true`.
    pub endpoint: &'static str,
    pub url: String,
    pub result: ProbeResult,
}

/// What the write exchange looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteObservation {
    pub status_code: u32,
    /// HTTP 200 or 201 on the PUT.
    pub writable: bool,
    /// First 200 characters of the response body.
    pub response_snippet: String,
    /// `Some(true)` if the DELETE cleanup succeeded, `Some(false)` if it
    /// failed, `None` when nothing was written.
    pub cleaned_up: Option<bool>,
}

/// Outcome of the write probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    Observed(WriteObservation),
    /// The PUT itself failed at the network level; writability is unknown.
    Error(String),
}

impl WriteResult {
    pub fn writable(&self) -> bool {
        matches!(self, WriteResult::Observed(o) if o.writable)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WriteResult::Error(e) => Some(e),
            WriteResult::Observed(_) => None,
        }
    }
}
