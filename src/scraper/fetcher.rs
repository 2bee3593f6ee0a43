//! HTTP fetcher with bounded retry
//!
//! This module handles all HTTP requests for the scraper:
//! - Building a reqwest client with a proper user agent and timeout
//! - Fetching one listing page with retry-with-delay
//! - Classifying every non-success response as retryable

use crate::config::UserAgentConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Retry policy for a single page fetch
///
/// Every attempt is independent: a timeout, a transport error, and a non-2xx
/// status all count the same against the attempt budget, and no partial body
/// is carried across attempts.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts before giving up on a URL
    pub max_attempts: u32,

    /// Fixed delay between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    /// 3 attempts with a fixed 2 second delay between them
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2))
    }
}

/// Builds the HTTP client used for all fetches in a run
///
/// # Arguments
///
/// * `config` - User agent identification
/// * `timeout` - Per-request timeout; a timed-out request counts as one
///   failed attempt under the retry policy
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let user_agent = if config.contact_url.is_empty() {
        format!("{}/{}", config.name, config.version)
    } else {
        format!("{}/{} (+{})", config.name, config.version, config.contact_url)
    };

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page, retrying on any failure
///
/// Any transport error or non-2xx status is retryable. After the attempt
/// budget is exhausted the last error is surfaced as a terminal
/// [`ScrapeError::FetchExhausted`] for this URL; the orchestrator downgrades
/// that to a missing page rather than aborting the run.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The page URL to fetch
/// * `policy` - Attempt budget and inter-attempt delay
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError::FetchExhausted)` - All attempts failed
pub async fn fetch_page(client: &Client, url: &Url, policy: &RetryPolicy) -> Result<String, ScrapeError> {
    let mut attempt = 0;

    loop {
        attempt += 1;

        match attempt_fetch(client, url).await {
            Ok(body) => return Ok(body),
            Err(e) => {
                tracing::warn!(
                    "Attempt {}/{} failed for {}: {}",
                    attempt,
                    policy.max_attempts,
                    url,
                    e
                );

                if attempt >= policy.max_attempts {
                    return Err(ScrapeError::FetchExhausted {
                        url: url.to_string(),
                        attempts: attempt,
                        source: e,
                    });
                }

                tokio::time::sleep(policy.delay).await;
            }
        }
    }
}

/// One independent fetch attempt
async fn attempt_fetch(client: &Client, url: &Url) -> Result<String, reqwest::Error> {
    let response = client.get(url.clone()).send().await?;
    let response = response.error_for_status()?;
    response.text().await
}
