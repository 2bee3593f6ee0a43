//! Run summary generation
//!
//! Summarizes what a run produced: how many records came back and which of
//! the planned pages contributed any. Pages without records are either past
//! the end of the listing or pages whose fetch failed; the run's log
//! warnings carry that distinction.

use crate::scraper::Meeting;
use std::collections::BTreeMap;

/// Summary of one scrape run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of pages the run planned to fetch
    pub pages_planned: u32,

    /// Records extracted per contributing page, in page order
    pub records_per_page: BTreeMap<u32, usize>,

    /// Total records extracted
    pub total_records: usize,
}

/// Builds a summary from the aggregate record set
pub fn summarize(meetings: &[Meeting], pages_planned: u32) -> RunSummary {
    let mut records_per_page = BTreeMap::new();
    for meeting in meetings {
        *records_per_page.entry(meeting.page).or_insert(0) += 1;
    }

    RunSummary {
        pages_planned,
        records_per_page,
        total_records: meetings.len(),
    }
}

/// Prints a summary to stdout
pub fn print_summary(summary: &RunSummary) {
    println!("=== Scrape Summary ===");
    println!("Pages planned:   {}", summary.pages_planned);
    println!(
        "Pages with data: {}",
        summary.records_per_page.len()
    );
    println!("Total records:   {}", summary.total_records);

    for (page, count) in &summary.records_per_page {
        println!("  page {}: {} records", page, count);
    }
}
