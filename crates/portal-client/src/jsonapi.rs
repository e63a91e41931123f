//! `reqwest` implementation of [`ArticleSource`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

use portal_core::defaults::{ERROR_BODY_LIMIT, SLOW_FETCH_THRESHOLD_MS};
use portal_core::{ArticleSource, CompoundDocument, Error, Result};

use crate::config::ClientConfig;

/// Fetches the article collection with a single unauthenticated GET.
#[derive(Debug, Clone)]
pub struct JsonApiClient {
    client: Client,
    config: ClientConfig,
}

impl JsonApiClient {
    /// Create a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            url = %config.articles_url(),
            timeout_secs = config.timeout_secs,
            "Initializing JSON:API client"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn fetch_internal(&self, url: &str) -> Result<CompoundDocument> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Request(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body: truncate_body(body, ERROR_BODY_LIMIT),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Request(format!("Failed to read response body: {}", e)))?;
        debug!(status = status.as_u16(), response_len = bytes.len(), "Response received");

        CompoundDocument::from_slice(&bytes)
    }
}

/// Keep at most `limit` bytes of an error body, cut on a char boundary.
fn truncate_body(mut body: String, limit: usize) -> String {
    if body.len() <= limit {
        return body;
    }
    let mut end = limit;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body.truncate(end);
    body.push_str("...");
    body
}

#[async_trait]
impl ArticleSource for JsonApiClient {
    #[instrument(skip(self), fields(subsystem = "client", component = "jsonapi", op = "fetch_articles", url = %self.config.articles_url()))]
    async fn fetch_articles(&self) -> Result<CompoundDocument> {
        let start = Instant::now();
        let url = self.config.articles_url();

        let result = self.fetch_internal(&url).await;
        let elapsed = start.elapsed().as_millis() as u64;

        match &result {
            Ok(document) => {
                info!(
                    article_count = document.len(),
                    included_count = document.included.len(),
                    duration_ms = elapsed,
                    "Fetched articles"
                );
                if elapsed > SLOW_FETCH_THRESHOLD_MS {
                    warn!(duration_ms = elapsed, "Slow article fetch");
                }
            }
            Err(e) => {
                error!(error = %e, duration_ms = elapsed, "Article fetch failed");
            }
        }

        result
    }
}
