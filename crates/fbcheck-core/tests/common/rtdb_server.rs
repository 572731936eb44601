//! Minimal HTTP/1.1 server imitating a Realtime Database REST endpoint.
//!
//! GETs answer with a fixed status/body, PUTs with the write status, DELETEs
//! with 200. Every request line is recorded so tests can assert which methods
//! and paths were hit.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RtdbServerOptions {
    pub read_status: u16,
    pub read_body: &'static str,
    pub write_status: u16,
    /// If set, GETs for this path stall longer than any client timeout.
    pub stall_path: Option<&'static str>,
}

impl RtdbServerOptions {
    /// Rules deny everything (the default for new projects).
    pub fn locked() -> Self {
        Self {
            read_status: 401,
            read_body: r#"{"error":"Permission denied"}"#,
            write_status: 401,
            stall_path: None,
        }
    }

    /// `".read": true, ".write": true`.
    pub fn open(read_body: &'static str) -> Self {
        Self {
            read_status: 200,
            read_body,
            write_status: 200,
            stall_path: None,
        }
    }
}

/// A recorded request: method and path (with query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub body: String,
}

pub struct RtdbServer {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl RtdbServer {
    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.seen().iter().filter(|s| s.method == method).count()
    }
}

/// Starts the server on an ephemeral port. It runs until the process exits.
pub fn start(opts: RtdbServerOptions) -> RtdbServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            let seen = Arc::clone(&seen_srv);
            thread::spawn(move || handle(stream, &opts, &seen));
        }
    });
    RtdbServer {
        base_url: format!("http://127.0.0.1:{}", port),
        seen,
    }
}

fn handle(mut stream: TcpStream, opts: &RtdbServerOptions, seen: &Mutex<Vec<Seen>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let (head, body) = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    let mut parts = head.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    seen.lock().unwrap().push(Seen {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    if method == "GET" && opts.stall_path == Some(path.as_str()) {
        thread::sleep(Duration::from_secs(3));
        return;
    }

    let (status, payload) = match method.as_str() {
        "GET" => (opts.read_status, opts.read_body.to_string()),
        "PUT" if matches!(opts.write_status, 200 | 201) => (opts.write_status, body),
        "PUT" => (opts.write_status, r#"{"error":"Permission denied"}"#.to_string()),
        "DELETE" => (200, "null".to_string()),
        _ => (405, String::new()),
    };
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Reads the header block and a `Content-Length` body.
fn read_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let content_length = head
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..]).into_owned();
    Some((head, body))
}
