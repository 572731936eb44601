//! Security assessment and the human-readable report.
//!
//! [`assess`] reduces a run's [`Findings`] to a handful of flags;
//! [`render`] prints them. Neither touches the network.

mod render;

pub use render::render;

use crate::checker::Findings;

/// What the write probe established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    Writable,
    Restricted,
    /// The PUT failed at the network level.
    Untested(String),
    Skipped,
}

/// Aggregated verdict for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// At least one read probe got HTTP 200.
    pub public_readable: bool,
    /// At least one readable probe returned non-empty data.
    pub data_exposed: bool,
    pub write: WriteStatus,
}

impl Assessment {
    pub fn publicly_writable(&self) -> bool {
        self.write == WriteStatus::Writable
    }

    pub fn is_insecure(&self) -> bool {
        self.public_readable || self.publicly_writable()
    }
}

pub fn assess(findings: &Findings) -> Assessment {
    let public_readable = findings.reads.iter().any(|r| r.result.accessible());
    let data_exposed = findings
        .reads
        .iter()
        .any(|r| r.result.has_data() == Some(true));
    let write = match &findings.write {
        None => WriteStatus::Skipped,
        Some(w) if w.writable() => WriteStatus::Writable,
        Some(w) => match w.error() {
            Some(e) => WriteStatus::Untested(e.to_string()),
            None => WriteStatus::Restricted,
        },
    };
    Assessment {
        public_readable,
        data_exposed,
        write,
    }
}
