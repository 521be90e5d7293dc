//! In-memory fetcher for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{FetchError, FetchResponse, Fetcher};

#[derive(Debug, Clone)]
enum Resource {
    Respond(FetchResponse),
    Fail(String),
    Hang,
}

/// Serves canned responses and records every requested path.
///
/// Paths not registered answer `404 Not Found`.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, Resource>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` with status 200 at `path`.
    pub fn with_body(self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.with_response(path, FetchResponse::ok(body))
    }

    pub fn with_response(mut self, path: &str, response: FetchResponse) -> Self {
        self.resources
            .insert(normalize(path), Resource::Respond(response));
        self
    }

    /// Fails requests for `path` before any response is received.
    pub fn with_failure(mut self, path: &str, message: &str) -> Self {
        self.resources
            .insert(normalize(path), Resource::Fail(message.to_string()));
        self
    }

    /// Requests for `path` never complete.
    pub fn with_hang(mut self, path: &str) -> Self {
        self.resources.insert(normalize(path), Resource::Hang);
        self
    }

    /// Number of requests made for `path`.
    pub fn request_count(&self, path: &str) -> usize {
        let path = normalize(path);
        self.requests
            .lock()
            .expect("Failed to acquire request log lock")
            .iter()
            .filter(|requested| **requested == path)
            .count()
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let path = normalize(path);
        self.requests
            .lock()
            .expect("Failed to acquire request log lock")
            .push(path.clone());

        match self.resources.get(&path).cloned() {
            Some(Resource::Respond(response)) => Ok(response),
            Some(Resource::Fail(message)) => Err(FetchError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message,
            ))),
            Some(Resource::Hang) => std::future::pending().await,
            None => Ok(FetchResponse::not_found()),
        }
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches("./").to_string()
}
