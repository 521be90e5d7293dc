use async_trait::async_trait;
use url::Url;

use super::{FetchError, FetchResponse, Fetcher};

/// Fetches site resources over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Create a new fetcher. A trailing slash is added to the base URL so
    /// relative paths resolve inside it.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a URL for a resource path.
    fn url(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();

        if !status.is_success() {
            return Ok(FetchResponse::status(status.as_u16(), reason));
        }

        let body = response.bytes().await?;
        Ok(FetchResponse {
            status: status.as_u16(),
            reason,
            body: body.to_vec(),
        })
    }
}
