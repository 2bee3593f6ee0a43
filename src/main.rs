//! MEP Meetings main entry point
//!
//! Command-line interface for the European Parliament meetings scraper.

use anyhow::Context;
use clap::Parser;
use mep_meetings::config::{load_config, validate, Config};
use mep_meetings::output::{print_summary, summarize, write_csv};
use mep_meetings::scraper::{run_scrape, EuroparlSite, Site};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Scrape a Member of the European Parliament's past meetings
#[derive(Parser, Debug)]
#[command(name = "mep-meetings")]
#[command(version)]
#[command(about = "Scrapes past-meeting listings for one MEP", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the number of pages from the config file
    #[arg(long, value_name = "N")]
    pages: Option<u32>,

    /// Validate the config and print the planned URLs without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if let Some(pages) = cli.pages {
        config.scraper.pages = pages;
        // Re-validate so --pages 0 fails the same way the config file would
        validate(&config).context("invalid --pages override")?;
    }

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_scrape(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mep_meetings=info,warn"),
            1 => EnvFilter::new("mep_meetings=debug,info"),
            2 => EnvFilter::new("mep_meetings=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --dry-run: validates the config and prints the planned fetch set
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let site = EuroparlSite::from_seed_url(&config.scraper.seed_url)?;

    println!("=== Dry Run ===\n");
    println!("Member id:       {}", site.member());
    println!("Pages:           {}", config.scraper.pages);
    println!("Max connections: {}", config.scraper.max_connections);
    println!("Timeout:         {}s", config.scraper.request_timeout_secs);
    println!("CSV output:      {}", config.output.csv_path);

    println!("\nPlanned URLs:");
    for request in site.plan_links(config.scraper.pages) {
        println!("  [{}] {}", request.page, request.url);
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(config: &Config) -> anyhow::Result<()> {
    let meetings = run_scrape(config).await?;

    write_csv(Path::new(&config.output.csv_path), &meetings)?;

    let summary = summarize(&meetings, config.scraper.pages);
    print_summary(&summary);

    Ok(())
}
