//! Test utilities and mocks for pymatrix unit tests.
//!
//! This module provides a mock implementation of the fetch interface and
//! builders for the JSON documents pymatrix consumes, so the pipeline can be
//! exercised without network access or a `uv` installation.
//!
//! # Example
//!
//! ```rust,ignore
//! use pymatrix::test_support::{IndexDocumentBuilder, MockFetcher};
//!
//! #[test]
//! fn test_example() {
//!     let mut fetcher = MockFetcher::new();
//!     fetcher.add(
//!         "https://pypi.org/pypi/numpy/json",
//!         IndexDocumentBuilder::new("numpy").release("2.1.3", Some(">=3.10")).build(),
//!     );
//!
//!     let mut index = IndexClient::with_fetcher("https://pypi.org/pypi", fetcher).unwrap();
//!     // Use the client in tests...
//! }
//! ```

pub mod fixtures;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use url::Url;

use crate::core::errors::MatrixError;
use crate::sources::index::Fetch;

// Re-export fixtures for convenience
pub use fixtures::*;

/// Canned response for one URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(String),
    Failure(String),
}

/// Mock fetcher serving canned bodies and counting requests.
///
/// Unknown URLs fail like an HTTP 404 would.
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    calls: Rc<Cell<usize>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MockFetcher {
    /// Create a fetcher with no canned responses.
    pub fn new() -> Self {
        MockFetcher::default()
    }

    /// Serve `body` for `url`.
    pub fn add(&mut self, url: &str, body: impl Into<String>) -> &mut Self {
        self.responses
            .insert(url.to_string(), MockResponse::Body(body.into()));
        self
    }

    /// Fail requests for `url` with `message`.
    pub fn add_failure(&mut self, url: &str, message: &str) -> &mut Self {
        self.responses
            .insert(url.to_string(), MockResponse::Failure(message.to_string()));
        self
    }

    /// Shared request counter; stays valid after the fetcher is moved.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }

    /// Shared log of requested URLs.
    pub fn requests(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.requests)
    }
}

impl Fetch for MockFetcher {
    fn fetch(&mut self, url: &Url) -> Result<String, MatrixError> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push(url.to_string());

        match self.responses.get(url.as_str()) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Failure(message)) => Err(MatrixError::Fetch {
                url: url.to_string(),
                message: message.clone(),
            }),
            None => Err(MatrixError::Fetch {
                url: url.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fetcher() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .add("https://example.com/a", "{}")
            .add_failure("https://example.com/b", "connection reset");
        let calls = fetcher.calls();
        let requests = fetcher.requests();

        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b").unwrap();
        let c = Url::parse("https://example.com/c").unwrap();

        assert_eq!(fetcher.fetch(&a).unwrap(), "{}");
        assert!(fetcher.fetch(&b).unwrap_err().to_string().contains("connection reset"));
        assert!(fetcher.fetch(&c).unwrap_err().to_string().contains("404"));

        assert_eq!(calls.get(), 3);
        assert_eq!(requests.borrow().len(), 3);
    }
}
