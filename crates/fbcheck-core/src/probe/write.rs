//! Anonymous write probe with best-effort cleanup.

use super::observer::ProbeObserver;
use super::throttle::Throttle;
use super::types::{WriteObservation, WriteResult};
use crate::http::{HttpRequest, HttpTransport, Method};
use crate::target::Target;
use serde_json::json;
use std::time::Duration;

const SNIPPET_CHARS: usize = 200;

/// Timeouts for the PUT and for the cleanup DELETE.
#[derive(Debug, Clone, Copy)]
pub struct WriteTimeouts {
    pub write: Duration,
    pub cleanup: Duration,
}

/// Unique child path for a probe started at `timestamp` (Unix seconds).
pub fn write_probe_path(timestamp: u64) -> String {
    format!("/security_test_{}.json", timestamp)
}

/// Marker document written by the probe.
pub fn write_payload(timestamp: u64) -> serde_json::Value {
    json!({ "test": "security_check", "timestamp": timestamp })
}

/// PUTs a marker document under a fresh path; if that succeeds, DELETEs it.
///
/// HTTP 200/201 on the PUT means writable. A transport failure on the PUT
/// yields [`WriteResult::Error`]: writability is then unknown, not denied.
/// Cleanup failures are logged and reported to the observer only.
pub fn probe_write_access<T: HttpTransport + ?Sized>(
    transport: &T,
    target: &Target,
    timestamp: u64,
    timeouts: WriteTimeouts,
    throttle: &mut Throttle,
    observer: &mut dyn ProbeObserver,
) -> WriteResult {
    let url = target.join(&write_probe_path(timestamp));
    let body = write_payload(timestamp).to_string().into_bytes();

    throttle.wait();
    observer.on_request(Method::Put, &url);
    let response = match transport.send(&HttpRequest::put_json(url.clone(), body, timeouts.write))
    {
        Ok(r) => r,
        Err(e) => {
            let message = e.to_string();
            tracing::warn!(%url, error = %message, "write probe failed");
            observer.on_error(&url, &message);
            return WriteResult::Error(message);
        }
    };

    let writable = matches!(response.status, 200 | 201);
    let response_snippet: String = response.text().chars().take(SNIPPET_CHARS).collect();

    let cleaned_up = if writable {
        tracing::warn!(%url, status = response.status, "anonymous write accepted");
        Some(cleanup(transport, &url, timeouts.cleanup, throttle, observer))
    } else {
        None
    };

    WriteResult::Observed(WriteObservation {
        status_code: response.status,
        writable,
        response_snippet,
        cleaned_up,
    })
}

fn cleanup<T: HttpTransport + ?Sized>(
    transport: &T,
    url: &str,
    timeout: Duration,
    throttle: &mut Throttle,
    observer: &mut dyn ProbeObserver,
) -> bool {
    throttle.wait();
    observer.on_request(Method::Delete, url);
    let ok = match transport.send(&HttpRequest::delete(url, timeout)) {
        Ok(r) if (200..300).contains(&r.status) => true,
        Ok(r) => {
            tracing::warn!(%url, status = r.status, "cleanup DELETE rejected");
            false
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "cleanup DELETE failed");
            false
        }
    };
    observer.on_cleanup(url, ok);
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::scripted::{json_response, ScriptedTransport};
    use crate::http::TransportError;
    use crate::probe::NoopObserver;

    const TS: u64 = 1_700_000_000;

    fn timeouts() -> WriteTimeouts {
        WriteTimeouts {
            write: Duration::from_secs(10),
            cleanup: Duration::from_secs(5),
        }
    }

    fn run(transport: &ScriptedTransport) -> WriteResult {
        probe_write_access(
            transport,
            &Target::parse("demo.firebaseio.com").unwrap(),
            TS,
            timeouts(),
            &mut Throttle::new(Duration::ZERO),
            &mut NoopObserver,
        )
    }

    #[test]
    fn path_and_payload() {
        assert_eq!(write_probe_path(TS), "/security_test_1700000000.json");
        let p = write_payload(TS);
        assert_eq!(p["test"], "security_check");
        assert_eq!(p["timestamp"], TS);
    }

    #[test]
    fn accepted_put_is_writable_and_cleaned_up() {
        let transport = ScriptedTransport::new(|req| match req.method {
            Method::Put => Ok(json_response(201, r#"{"test":"security_check"}"#)),
            Method::Delete => Ok(json_response(200, "null")),
            Method::Get => panic!("no GET expected"),
        });
        let result = run(&transport);
        assert!(result.writable());
        match &result {
            WriteResult::Observed(o) => {
                assert_eq!(o.status_code, 201);
                assert_eq!(o.cleaned_up, Some(true));
                assert_eq!(o.response_snippet, r#"{"test":"security_check"}"#);
            }
            _ => panic!("expected observation"),
        }

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(
            sent[0].url,
            "https://demo.firebaseio.com/security_test_1700000000.json"
        );
        assert_eq!(sent[0].timeout, Duration::from_secs(10));
        let body: serde_json::Value =
            serde_json::from_slice(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, write_payload(TS));
        assert_eq!(sent[1].method, Method::Delete);
        assert_eq!(sent[1].url, sent[0].url);
        assert_eq!(sent[1].timeout, Duration::from_secs(5));
    }

    #[test]
    fn denied_put_is_not_writable_and_no_cleanup() {
        let transport = ScriptedTransport::always(401, r#"{"error":"Permission denied"}"#);
        let result = run(&transport);
        assert!(!result.writable());
        assert!(result.error().is_none());
        assert_eq!(transport.count(Method::Delete), 0);
        match result {
            WriteResult::Observed(o) => assert_eq!(o.cleaned_up, None),
            _ => panic!("expected observation"),
        }
    }

    #[test]
    fn other_2xx_is_not_writable() {
        let transport = ScriptedTransport::always(204, "");
        assert!(!run(&transport).writable());
    }

    #[test]
    fn cleanup_failure_is_swallowed() {
        let transport = ScriptedTransport::new(|req| match req.method {
            Method::Put => Ok(json_response(200, "{}")),
            _ => Err(TransportError::Timeout),
        });
        let result = run(&transport);
        assert!(result.writable());
        match result {
            WriteResult::Observed(o) => assert_eq!(o.cleaned_up, Some(false)),
            _ => panic!("expected observation"),
        }
    }

    #[test]
    fn network_failure_is_untested_not_denied() {
        let transport =
            ScriptedTransport::new(|_| Err(TransportError::Connection("refused".to_string())));
        let result = run(&transport);
        assert!(!result.writable());
        assert!(result.error().unwrap().starts_with("Connection error"));
        assert_eq!(transport.count(Method::Delete), 0);
    }

    #[test]
    fn snippet_truncated_to_200_chars() {
        let long: &'static str = Box::leak("é".repeat(500).into_boxed_str());
        let transport = ScriptedTransport::always(403, long);
        match run(&transport) {
            WriteResult::Observed(o) => assert_eq!(o.response_snippet.chars().count(), 200),
            _ => panic!("expected observation"),
        }
    }
}
