//! Scraper module for page fetching and record extraction
//!
//! This module contains the core pipeline:
//! - HTTP fetching with bounded retry
//! - Global concurrency limiting
//! - Fault-tolerant record extraction from listing pages
//! - Overall run coordination

mod coordinator;
mod fetcher;
mod limiter;
mod parser;
mod site;

pub use coordinator::{run_scrape, Coordinator, FetchOutcome};
pub use fetcher::{build_http_client, fetch_page, RetryPolicy};
pub use limiter::{FetchLimiter, DEFAULT_MAX_CONNECTIONS};
pub use parser::{parse_page, Meeting};
pub use site::{EuroparlSite, Site};
