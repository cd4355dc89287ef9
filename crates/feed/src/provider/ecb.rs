use std::time::Duration;

use async_trait::async_trait;
use eurofx_core::Snapshot;
use reqwest::Client;
use tracing::debug;

use super::FeedSource;
use crate::errors::FeedError;
use crate::parser::parse_feed;

/// Last 90 days of reference rates. The full history lives at `eurofxref-hist.xml`.
pub const DEFAULT_FEED_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist-90d.xml";

const PROVIDER_ID: &str = "ECB";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the reference rate document published by the central bank.
pub struct EcbFeedClient {
    client: Client,
    url: String,
}

impl EcbFeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn http_error(&self, message: impl ToString) -> FeedError {
        FeedError::Http {
            url: self.url.clone(),
            message: message.to_string(),
        }
    }
}

impl Default for EcbFeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

#[async_trait]
impl FeedSource for EcbFeedClient {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn fetch(&self) -> Result<Vec<Snapshot>, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.http_error(format!("HTTP request returned {}", status)));
        }

        let body = response.bytes().await.map_err(|e| self.http_error(e))?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        parse_feed(body.as_ref())
    }
}
