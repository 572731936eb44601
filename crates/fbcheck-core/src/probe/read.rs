//! Anonymous read probes.

use super::inspect::inspect_body;
use super::observer::ProbeObserver;
use super::throttle::Throttle;
use super::types::{EndpointResult, ProbeResult, ReadObservation};
use crate::http::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::target::Target;
use std::time::Duration;

/// Paths probed for read access: the root, a shallow root listing (keys only,
/// cheap even on large databases), and an arbitrary child path.
pub const READ_ENDPOINTS: [&str; 3] = ["/.json", "/.json?shallow=true", "/test.json"];

/// GETs every entry of [`READ_ENDPOINTS`] in order.
///
/// A network failure on one endpoint is recorded and the next one is still
/// probed.
pub fn probe_read_access<T: HttpTransport + ?Sized>(
    transport: &T,
    target: &Target,
    timeout: Duration,
    throttle: &mut Throttle,
    observer: &mut dyn ProbeObserver,
) -> Vec<EndpointResult> {
    READ_ENDPOINTS
        .iter()
        .map(|&endpoint| {
            let url = target.join(endpoint);
            throttle.wait();
            observer.on_request(Method::Get, &url);

            let result = match transport.send(&HttpRequest::get(url.clone(), timeout)) {
                Ok(response) => ProbeResult::Observed(observe(&response)),
                Err(e) => {
                    let message = e.to_string();
                    tracing::warn!(%url, error = %message, "read probe failed");
                    observer.on_error(&url, &message);
                    ProbeResult::Error(message)
                }
            };

            EndpointResult {
                endpoint,
                url,
                result,
            }
        })
        .collect()
}

fn observe(response: &HttpResponse) -> ReadObservation {
    let accessible = response.status == 200;
    let data = if accessible && !response.body.is_empty() {
        Some(inspect_body(&response.body))
    } else {
        None
    };
    ReadObservation {
        status_code: response.status,
        accessible,
        response_size: response.body.len(),
        content_type: response
            .content_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        data,
    }
}
