//! Console narration of a run while probes are in flight.

use fbcheck_core::http::Method;
use fbcheck_core::probe::{Phase, ProbeObserver};
use std::io::Write;

/// Prints each phase, request and failure as it happens.
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

// Console write errors are ignored.
impl<W: Write> ProbeObserver for ConsoleObserver<W> {
    fn on_phase(&mut self, phase: Phase) {
        let line = match phase {
            Phase::Read => "\n📖 Testing read access...",
            Phase::Write => "\n✏️  Testing write access...",
            Phase::WriteSkipped => "\n✏️  Skipping write access test",
        };
        let _ = writeln!(self.out, "{}", line);
    }

    fn on_request(&mut self, method: Method, url: &str) {
        let _ = match method {
            Method::Get => writeln!(self.out, "Testing: {}", url),
            Method::Put => writeln!(self.out, "Testing write access: {}", url),
            Method::Delete => Ok(()),
        };
    }

    fn on_error(&mut self, url: &str, error: &str) {
        let _ = writeln!(self.out, "❌ Error for {}: {}", url, error);
    }

    fn on_cleanup(&mut self, _url: &str, succeeded: bool) {
        let _ = if succeeded {
            writeln!(self.out, "✅ Cleaned up test data")
        } else {
            writeln!(self.out, "⚠️  Could not clean up test data")
        };
    }
}
