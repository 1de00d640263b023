//! HTTP fetcher implementation
//!
//! One GET per call, nothing more: no timeout, no retry, no custom headers,
//! and reqwest's default redirect policy. A failure is returned to the caller,
//! which decides what default to substitute.

use crate::{ScrapeError, ScrapeResult};
use reqwest::Client;

/// Builds the HTTP client shared by every request of a run
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client (TLS backend init)
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Issues GET requests and hands back the response body
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher over an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a fetcher with a freshly built client
    pub fn with_default_client() -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client()?))
    }

    /// Fetches a URL and returns its markup
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Body of a 2xx response
    /// * `Err(ScrapeError::Fetch)` - Transport error, non-success status, or unreadable body
    pub async fn fetch(&self, url: &str) -> ScrapeResult<String> {
        tracing::trace!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| ScrapeError::Fetch {
            url: url.to_string(),
            cause: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Fetch {
                url: url.to_string(),
                cause: format!("HTTP status {}", status),
            });
        }

        response.text().await.map_err(|e| ScrapeError::Fetch {
            url: url.to_string(),
            cause: e.to_string(),
        })
    }
}
