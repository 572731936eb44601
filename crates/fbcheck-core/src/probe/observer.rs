//! Progress callbacks so the caller can narrate a run as it happens.

use crate::http::Method;

/// Stage of a run, announced before its requests go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Read,
    Write,
    WriteSkipped,
}

/// Notified as probes issue requests. All methods default to doing nothing.
pub trait ProbeObserver {
    fn on_phase(&mut self, _phase: Phase) {}

    /// A request is about to be sent.
    fn on_request(&mut self, _method: Method, _url: &str) {}

    /// A request failed at the network level; probing continues.
    fn on_error(&mut self, _url: &str, _error: &str) {}

    /// Cleanup DELETE after a successful write finished (`true`) or failed.
    fn on_cleanup(&mut self, _url: &str, _succeeded: bool) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProbeObserver for NoopObserver {}
