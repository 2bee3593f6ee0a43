//! Listing-page parser
//!
//! Each listing page is an HTML fragment containing zero or more meeting
//! containers. Extraction is fault tolerant at every level: a field that
//! cannot be extracted becomes `None`, a record that loses fields keeps its
//! siblings, and a page whose structure cannot be selected at all yields an
//! empty sequence with a warning instead of an error.

use crate::links::PageRequest;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// CSS selector matching one meeting record container
const CONTAINER_SELECTOR: &str = ".erpl_document-header";

const TITLE_SELECTOR: &str = ".t-item";
const DATE_SELECTOR: &str = "time";
const PLACE_SELECTOR: &str = ".erpl_document-subtitle-location";
const CAPACITY_SELECTOR: &str = ".erpl_document-subtitle-capacity";
const COMMITTEE_SELECTOR: &str = ".erpl_badge-committee";
const MEETING_WITH_SELECTOR: &str = ".erpl_document-subtitle-author";

/// One extracted meeting record
///
/// Every field is independently nullable; a record with all fields `None` is
/// still valid and emitted. Serde renames match the exported CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meeting {
    #[serde(rename = "Title")]
    pub title: Option<String>,

    /// Parsed from the `datetime` attribute of the container's `<time>` tag
    #[serde(rename = "Date")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "Place")]
    pub place: Option<String>,

    /// Capacity in which the member attended (e.g. "Member")
    #[serde(rename = "Capacity")]
    pub capacity: Option<String>,

    #[serde(rename = "Code of associated committee or delegation")]
    pub committee_code: Option<String>,

    #[serde(rename = "Meeting with")]
    pub meeting_with: Option<String>,

    /// Provenance: the 1-indexed listing page this record came from
    #[serde(rename = "page_number")]
    pub page: u32,
}

/// Parses one listing page into its meeting records
///
/// Never fails for the caller:
/// - an empty or whitespace-only body is the end-of-pagination signal and
///   yields an empty sequence
/// - a page whose container selector cannot be evaluated yields an empty
///   sequence with a warning
///
/// Records are returned in document order with the request's page number
/// attached as provenance. Parsing is pure; the same body always yields the
/// same records.
pub fn parse_page(body: &str, request: &PageRequest) -> Vec<Meeting> {
    if body.trim().is_empty() {
        tracing::debug!("Page {} is empty, treating as end of results", request.page);
        return Vec::new();
    }

    let document = Html::parse_document(body);

    let containers = match Selector::parse(CONTAINER_SELECTOR) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!(
                "Failed to select meeting containers on page {}: {:?}",
                request.page,
                e
            );
            return Vec::new();
        }
    };

    document
        .select(&containers)
        .map(|container| extract_meeting(&container, request.page))
        .collect()
}

/// Extracts one record from its container
///
/// Each field goes through its own `Option`-returning accessor, so a missing
/// or malformed field never aborts extraction of its siblings.
fn extract_meeting(container: &ElementRef, page: u32) -> Meeting {
    Meeting {
        title: select_text(container, TITLE_SELECTOR),
        date: select_attr(container, DATE_SELECTOR, "datetime")
            .and_then(|value| parse_meeting_date(&value)),
        place: select_text(container, PLACE_SELECTOR),
        capacity: select_text(container, CAPACITY_SELECTOR),
        committee_code: select_text(container, COMMITTEE_SELECTOR),
        meeting_with: select_text(container, MEETING_WITH_SELECTOR),
        page,
    }
}

/// Selects the first element matching `selector` under `container` and
/// returns its text content, with lines trimmed and joined by " - "
///
/// Returns `None` if the selector is invalid, nothing matches, or the text
/// is empty.
fn select_text(container: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = container.select(&selector).next()?;

    let text = element
        .text()
        .flat_map(|chunk| chunk.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" - ");

    (!text.is_empty()).then_some(text)
}

/// Selects the first element matching `selector` under `container` and
/// returns the given attribute's value
fn select_attr(container: &ElementRef, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    container
        .select(&selector)
        .next()?
        .value()
        .attr(attr)
        .map(|value| value.to_string())
}

/// Parses the `datetime` attribute value into a date
///
/// Accepts a plain ISO date or a full timestamp whose first ten characters
/// form one. Anything else degrades to `None` like any other field failure.
fn parse_meeting_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    value
        .parse()
        .ok()
        .or_else(|| value.get(..10).and_then(|date| date.parse().ok()))
}
