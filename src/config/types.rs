use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Seed URL of the member's past-meetings page, containing the member id
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Number of listing pages to fetch
    pub pages: u32,

    /// Maximum number of concurrent page fetches
    #[serde(rename = "max-connections", default = "default_max_connections")]
    pub max_connections: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(default = "default_ua_name")]
    pub name: String,

    /// Version of the scraper
    #[serde(default = "default_ua_version")]
    pub version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url", default)]
    pub contact_url: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV export file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_ua_name(),
            version: default_ua_version(),
            contact_url: String::new(),
        }
    }
}

/// The europarl listing endpoint serves ten records per page; eight
/// connections keeps a whole run in roughly one wave without hammering it.
fn default_max_connections() -> u32 {
    8
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_ua_name() -> String {
    "mep-meetings".to_string()
}

fn default_ua_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
