//! HTTP page fetcher
//!
//! Issues GET requests with reqwest and returns the body as text.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::cache::Producer;
use crate::error::FetchError;

/// Fetches page bodies over HTTP.
///
/// Any response, including 4xx and 5xx statuses, is returned as content.
/// Only transport failures are errors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// GETs `url` and returns the response body.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(url, %status, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

impl Producer for HttpFetcher {
    type Key = String;
    type Value = String;
    type Error = FetchError;

    async fn produce(&self, url: &String) -> Result<String, FetchError> {
        self.fetch(url).await
    }
}
