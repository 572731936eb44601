//! Read and write probes against a Realtime Database target.
//!
//! Each probe is one independent request (plus a cleanup DELETE after a
//! successful write). Network failures are recorded in the result instead of
//! aborting the run; nothing is retried.

mod inspect;
mod observer;
mod read;
mod throttle;
mod types;
mod write;

pub use inspect::{inspect_body, DataSummary, DataType};
pub use observer::{NoopObserver, Phase, ProbeObserver};
pub use read::{probe_read_access, READ_ENDPOINTS};
pub use throttle::Throttle;
pub use types::{EndpointResult, ProbeResult, ReadObservation, WriteObservation, WriteResult};
pub use write::{probe_write_access, write_payload, write_probe_path, WriteTimeouts};
