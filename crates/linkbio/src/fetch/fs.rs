use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use super::{FetchError, FetchResponse, Fetcher};

/// Reads site resources from a local directory.
///
/// A missing file is reported as a `404 Not Found` response so that local
/// and remote sites fail the same way.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a resource path inside the root, refusing paths that leave it.
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes {
            return Err(FetchError::InvalidPath {
                path: path.to_string(),
                reason: "path must stay inside the site directory".to_string(),
            });
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl Fetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let file = self.resolve(path)?;
        tracing::debug!(path = %file.display(), "Reading site resource");

        match tokio::fs::read(&file).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse::not_found()),
            Err(e) => Err(e.into()),
        }
    }
}
