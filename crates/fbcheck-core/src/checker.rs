//! One checking run against a single target.

use crate::config::CheckerConfig;
use crate::http::{CurlTransport, HttpTransport};
use crate::probe::{
    probe_read_access, probe_write_access, EndpointResult, Phase, ProbeObserver, Throttle,
    WriteResult, WriteTimeouts,
};
use crate::target::Target;
use std::time::{SystemTime, UNIX_EPOCH};

/// Everything a run observed; input to [`crate::report`].
#[derive(Debug, Clone, PartialEq)]
pub struct Findings {
    pub base_url: String,
    pub reads: Vec<EndpointResult>,
    /// `None` when the write test was skipped.
    pub write: Option<WriteResult>,
}

/// Probes one database for anonymous read and write access.
///
/// Requests go out strictly one after another, spaced by the configured delay.
pub struct Checker<T> {
    target: Target,
    transport: T,
    config: CheckerConfig,
    throttle: Throttle,
}

impl Checker<CurlTransport> {
    /// Checker that talks to the network through libcurl.
    pub fn with_curl(target: Target, config: CheckerConfig) -> Self {
        let transport = CurlTransport::from_config(&config);
        Self::new(target, transport, config)
    }
}

impl<T: HttpTransport> Checker<T> {
    pub fn new(target: Target, transport: T, config: CheckerConfig) -> Self {
        let throttle = Throttle::new(config.request_delay());
        Self {
            target,
            transport,
            config,
            throttle,
        }
    }

    pub fn check_read_access(&mut self, observer: &mut dyn ProbeObserver) -> Vec<EndpointResult> {
        probe_read_access(
            &self.transport,
            &self.target,
            self.config.timeout(),
            &mut self.throttle,
            observer,
        )
    }

    pub fn check_write_access(&mut self, observer: &mut dyn ProbeObserver) -> WriteResult {
        let timeouts = WriteTimeouts {
            write: self.config.timeout(),
            cleanup: self.config.cleanup_timeout(),
        };
        probe_write_access(
            &self.transport,
            &self.target,
            unix_now(),
            timeouts,
            &mut self.throttle,
            observer,
        )
    }

    /// Read probes, then the write probe unless `skip_write`.
    pub fn run(&mut self, skip_write: bool, observer: &mut dyn ProbeObserver) -> Findings {
        tracing::info!(target_url = %self.target, skip_write, "starting check");
        observer.on_phase(Phase::Read);
        let reads = self.check_read_access(observer);
        let write = if skip_write {
            tracing::info!("write test skipped");
            observer.on_phase(Phase::WriteSkipped);
            None
        } else {
            observer.on_phase(Phase::Write);
            Some(self.check_write_access(observer))
        };
        Findings {
            base_url: self.target.base_url().to_string(),
            reads,
            write,
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
