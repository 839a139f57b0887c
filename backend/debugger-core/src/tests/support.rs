//! Shared test doubles.

use crate::error::RequesterError;
use crate::transport::{ChatTransport, RawResponse};

use common::RedactedApiKey;

use std::cell::{Cell, RefCell};

use url::Url;

pub const TEST_API_KEY: &str = "sk-test-0123456789abcdef";

/// Transport that replays a fixed response and records what it was sent.
pub struct StubTransport {
    response: Result<RawResponse, fn() -> RequesterError>,
    calls: Cell<usize>,
    last_body: RefCell<Option<Vec<u8>>>,
    last_authorization: RefCell<Option<String>>,
    last_endpoint: RefCell<Option<Url>>,
}

impl StubTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_result(Ok(RawResponse::new(status, body)))
    }

    pub fn failing(make_error: fn() -> RequesterError) -> Self {
        Self::with_result(Err(make_error))
    }

    fn with_result(response: Result<RawResponse, fn() -> RequesterError>) -> Self {
        Self {
            response,
            calls: Cell::new(0),
            last_body: RefCell::new(None),
            last_authorization: RefCell::new(None),
            last_endpoint: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_body_json(&self) -> serde_json::Value {
        let body = self.last_body.borrow();
        let bytes = body.as_ref().expect("transport was never called");
        serde_json::from_slice(bytes).expect("request body must be valid JSON")
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.borrow().clone()
    }

    pub fn last_endpoint(&self) -> Option<Url> {
        self.last_endpoint.borrow().clone()
    }
}

impl ChatTransport for StubTransport {
    fn post_json(
        &self,
        endpoint: &Url,
        api_key: &RedactedApiKey,
        body: Vec<u8>,
    ) -> Result<RawResponse, RequesterError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_body.borrow_mut() = Some(body);
        *self.last_authorization.borrow_mut() = Some(api_key.bearer_header_value());
        *self.last_endpoint.borrow_mut() = Some(endpoint.clone());

        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}
