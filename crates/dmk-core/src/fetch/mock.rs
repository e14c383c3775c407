//! In-memory [`Fetch`] used by unit tests; records every request.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{build_url, Fetch, FetchError};

#[derive(Debug, Clone)]
pub(crate) enum MockResponse {
    Body(Vec<u8>),
    /// Error status; the fetcher still returns its (HTML) body.
    Status(u32),
    Refused,
}

#[derive(Debug, Default)]
pub(crate) struct MockFetcher {
    routes: HashMap<String, MockResponse>,
    calls: RefCell<Vec<String>>,
}

impl MockFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a response for the full URL (including query string).
    pub(crate) fn route(mut self, url: &str, response: MockResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    pub(crate) fn body(self, url: &str, body: &str) -> Self {
        self.route(url, MockResponse::Body(body.as_bytes().to_vec()))
    }

    /// Full URLs requested so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetch for MockFetcher {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
        let full_url = build_url(url, query)?;
        self.calls.borrow_mut().push(full_url.clone());
        match self.routes.get(&full_url) {
            Some(MockResponse::Body(b)) => Ok(b.clone()),
            Some(MockResponse::Status(code)) => Ok(error_page(*code)),
            // CURLE_COULDNT_CONNECT
            Some(MockResponse::Refused) => Err(FetchError::Curl(curl::Error::new(7))),
            None => Ok(error_page(404)),
        }
    }
}

fn error_page(code: u32) -> Vec<u8> {
    format!("<html><body><h1>{code}</h1></body></html>").into_bytes()
}
