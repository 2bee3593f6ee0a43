//! MEP Meetings: a bounded-concurrency scraper for European Parliament
//! meeting listings
//!
//! This crate fetches the paginated "past meetings" listing for one Member of
//! the European Parliament, extracts structured meeting records from each
//! page, and aggregates them into a single ordered result set. Individual
//! page or field failures degrade gracefully instead of aborting the run.

pub mod config;
pub mod links;
pub mod output;
pub mod scraper;

use thiserror::Error;

/// Main error type for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Link planning error: {0}")]
    Link(#[from] LinkError),

    #[error("Fetch failed for {url} after {attempts} attempts: {source}")]
    FetchExhausted {
        url: String,
        attempts: u32,
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Fetch task panicked: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL: {0}")]
    InvalidSeedUrl(#[from] LinkError),
}

/// Link planning and member-id derivation errors
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("No member id found in seed URL: {0}")]
    MemberIdNotFound(String),
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for link operations
pub type LinkResult<T> = std::result::Result<T, LinkError>;

// Re-export commonly used types
pub use config::Config;
pub use links::{plan_links, MemberId, PageRequest};
pub use scraper::{run_scrape, Coordinator, EuroparlSite, Meeting, Site};
