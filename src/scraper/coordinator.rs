//! Scrape coordinator - main orchestration logic
//!
//! A run moves through five phases: plan the page URLs, dispatch one fetch
//! task per URL under the shared concurrency limiter, collect the outcomes
//! in plan order, parse the bodies that arrived, and flatten the per-page
//! records into one ordered result. Only pre-dispatch validation can abort a
//! run; everything after that degrades per page.

use crate::config::Config;
use crate::links::PageRequest;
use crate::scraper::fetcher::{build_http_client, fetch_page, RetryPolicy};
use crate::scraper::limiter::FetchLimiter;
use crate::scraper::parser::Meeting;
use crate::scraper::site::{EuroparlSite, Site};
use crate::Result;
use reqwest::Client;
use std::time::Duration;

/// The result of one dispatched page fetch
///
/// `body` is `None` when the retry budget for this page was exhausted; the
/// rest of the run is unaffected.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The request this outcome belongs to
    pub request: PageRequest,

    /// The page body, absent on exhausted retries
    pub body: Option<String>,
}

/// Drives a whole scrape run for one site
pub struct Coordinator<S: Site> {
    site: S,
    client: Client,
    limiter: FetchLimiter,
    policy: RetryPolicy,
    pages: u32,
}

impl<S: Site> Coordinator<S> {
    /// Creates a coordinator from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(site: S, config: &Config) -> Result<Self> {
        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.scraper.request_timeout_secs),
        )?;

        Ok(Self {
            site,
            client,
            limiter: FetchLimiter::new(config.scraper.max_connections as usize),
            policy: RetryPolicy::default(),
            pages: config.scraper.pages,
        })
    }

    /// Replaces the retry policy, mainly to shorten delays in tests
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the scrape and returns the aggregate record set
    ///
    /// Records preserve page order regardless of fetch completion order, and
    /// document order within each page. Pages whose fetch failed after all
    /// retries contribute nothing; the run still completes with whatever was
    /// obtainable.
    pub async fn run(&self) -> Result<Vec<Meeting>> {
        // Planning
        let requests = self.site.plan_links(self.pages);
        tracing::info!("Planned {} page requests", requests.len());

        // Dispatching: one task per request, each acquiring a limiter slot
        // before fetching
        let mut handles = Vec::with_capacity(requests.len());
        for request in requests {
            let client = self.client.clone();
            let limiter = self.limiter.clone();
            let policy = self.policy.clone();

            handles.push(tokio::spawn(async move {
                let _permit = limiter.acquire().await;

                let body = match fetch_page(&client, &request.url, &policy).await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        tracing::warn!("Giving up on page {}: {}", request.page, e);
                        None
                    }
                };

                FetchOutcome { request, body }
            }));
        }

        // Collecting: awaiting handles in spawn order keeps outcomes aligned
        // with the plan no matter which fetch finished first
        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            outcomes.push(handle.await?);
        }

        // Parsing and flattening
        let mut meetings = Vec::new();
        let mut pages_missed = 0u32;

        for outcome in &outcomes {
            match &outcome.body {
                Some(body) => {
                    let records = self.site.parse_page(body, &outcome.request);
                    tracing::debug!(
                        "Page {}: {} records extracted",
                        outcome.request.page,
                        records.len()
                    );
                    meetings.extend(records);
                }
                None => pages_missed += 1,
            }
        }

        tracing::info!(
            "Run complete: {} records from {} pages ({} missed)",
            meetings.len(),
            outcomes.len(),
            pages_missed
        );

        Ok(meetings)
    }
}

/// Runs a complete scrape from a validated configuration
///
/// This is the main library entry point. It derives the member id from the
/// configured seed URL, builds the coordinator, and runs it.
///
/// # Example
///
/// ```no_run
/// use mep_meetings::config::load_config;
/// use mep_meetings::scraper::run_scrape;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let meetings = run_scrape(&config).await?;
/// println!("{} meetings", meetings.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: &Config) -> Result<Vec<Meeting>> {
    let site = EuroparlSite::from_seed_url(&config.scraper.seed_url)?;
    tracing::info!(
        "Scraping past meetings for member {} ({} pages)",
        site.member(),
        config.scraper.pages
    );

    Coordinator::new(site, config)?.run().await
}
