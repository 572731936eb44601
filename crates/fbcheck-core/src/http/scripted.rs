//! Transport double for unit tests: answers from a closure and records requests.

use super::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use std::cell::RefCell;

type Responder = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError>>;

pub(crate) struct ScriptedTransport {
    responder: Responder,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + 'static,
    {
        Self {
            responder: Box::new(responder),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Every request answered with the same status and JSON body.
    pub(crate) fn always(status: u32, body: &'static str) -> Self {
        Self::new(move |_| Ok(json_response(status, body)))
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn count(&self, method: Method) -> usize {
        self.sent.borrow().iter().filter(|r| r.method == method).count()
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        (self.responder)(request)
    }
}

pub(crate) fn json_response(status: u32, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("application/json; charset=utf-8".to_string()),
        body: body.as_bytes().to_vec(),
    }
}
