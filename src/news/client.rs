//! Newscatcher headline API client
//!
//! This module provides functionality to fetch latest headlines for a
//! category, retrying on rate-limit responses with a bounded, fixed-delay
//! policy. Fetch failures never escape [`NewsClient::fetch_headlines`]; they
//! degrade to an empty article list and a log line.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

use super::Article;

/// Base URL for the Newscatcher latest headlines endpoint
const NEWSCATCHER_BASE_URL: &str = "https://api.newscatcherapi.com";

/// How many articles to request per category
const PAGE_SIZE: u32 = 100;

/// Errors that can occur when fetching headlines
#[derive(Debug, Error)]
pub enum NewsError {
    /// The upstream API asked us to slow down (HTTP 429)
    #[error("Rate limited by upstream API")]
    RateLimited,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Upstream returned a non-success status other than 429
    #[error("Upstream returned HTTP {0}")]
    BadStatus(StatusCode),
}

/// Bounded fixed-delay retry policy for rate-limit responses
///
/// The delay is also the pacing interval the refresh scheduler uses between
/// categories, so the backend never exceeds one upstream request per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts before giving up (including the first)
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(1),
        }
    }
}

/// Client for fetching headlines from the Newscatcher API
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl NewsClient {
    /// Creates a new NewsClient with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: NEWSCATCHER_BASE_URL.to_string(),
            api_key: api_key.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Overrides the upstream base URL (used by tests to point at a stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetches latest headlines for a category
    ///
    /// Retries on rate-limit responses up to the policy's attempt budget,
    /// sleeping the fixed delay between attempts. Any other failure returns
    /// an empty list immediately. This never returns an error: a failed
    /// fetch is a degraded (empty) result, not a request failure.
    pub async fn fetch_headlines(&self, category: &str) -> Vec<Article> {
        for attempt in 1..=self.retry.max_attempts {
            info!("Fetching news for category: {category} (Attempt {attempt})");
            match self.request_headlines(category).await {
                Ok(articles) => {
                    info!(
                        "Fetched {} articles for category: {category}",
                        articles.len()
                    );
                    return articles;
                }
                Err(NewsError::RateLimited) => {
                    warn!("Rate limit hit for category \"{category}\". Retrying in {:?}...", self.retry.delay);
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.delay).await;
                    }
                }
                Err(e) => {
                    error!("Error fetching {category} news: {e}");
                    return Vec::new();
                }
            }
        }

        error!("Failed to fetch news for category \"{category}\" after retries");
        Vec::new()
    }

    /// Issues a single upstream request for one category
    async fn request_headlines(&self, category: &str) -> Result<Vec<Article>, NewsError> {
        let url = format!(
            "{}/v2/latest_headlines?topic={category}&lang=en&page_size={PAGE_SIZE}",
            self.base_url
        );

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(NewsError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(NewsError::BadStatus(response.status()));
        }

        let body: HeadlinesResponse = response.json().await?;
        Ok(body.articles)
    }
}

/// Expected upstream response shape: `{ "articles": [...] }`
#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}
