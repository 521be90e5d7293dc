//! Resource fetching for the page pipeline.
//!
//! Every resource a page needs (the configuration document and theme
//! stylesheets) is addressed by a path relative to the site root and read
//! through a [`Fetcher`]. The site root is either a directory or an HTTP
//! base URL.

mod fs;
mod http;
#[cfg(test)]
pub mod memory;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

pub use fs::FsFetcher;
pub use http::HttpFetcher;

/// Errors that prevent a response from being received at all.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid resource path {path}: {reason}")]
    InvalidPath { path: String, reason: String },
}

/// A received response. Non-success statuses are responses, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            reason: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::status(404, "Not Found")
    }

    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Reads site resources by relative path.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs one request for `path` (e.g. `./content/data.json`).
    async fn fetch(&self, path: &str) -> Result<FetchResponse, FetchError>;
}

/// Where a site's resources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    Dir(PathBuf),
}

impl Source {
    /// Builds the fetcher that reads from this source.
    pub fn fetcher(&self) -> Arc<dyn Fetcher> {
        match self {
            Source::Url(base_url) => Arc::new(HttpFetcher::new(base_url.clone())),
            Source::Dir(root) => Arc::new(FsFetcher::new(root.clone())),
        }
    }

    /// The local site directory, if the source is one.
    pub fn directory(&self) -> Option<&Path> {
        match self {
            Source::Dir(root) => Some(root),
            Source::Url(_) => None,
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Url::parse(s)
                .map(Source::Url)
                .map_err(|e| format!("invalid source URL {s}: {e}"))
        } else {
            Ok(Source::Dir(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::Dir(root) => write!(f, "{}", root.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_str() {
        assert!(matches!(
            "https://example.com/site/".parse::<Source>(),
            Ok(Source::Url(_))
        ));
        assert_eq!(
            "./public".parse::<Source>(),
            Ok(Source::Dir(PathBuf::from("./public")))
        );
        assert!("http://".parse::<Source>().is_err());
    }

    #[test]
    fn test_source_directory() {
        let dir: Source = "site".parse().unwrap();
        assert_eq!(dir.directory(), Some(Path::new("site")));

        let url: Source = "http://localhost:8080".parse().unwrap();
        assert_eq!(url.directory(), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(FetchResponse::ok("{}").is_success());
        assert!(FetchResponse::status(204, "No Content").is_success());
        assert!(!FetchResponse::not_found().is_success());
        assert!(!FetchResponse::status(500, "Internal Server Error").is_success());
    }
}
