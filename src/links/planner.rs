//! Link planning for the paginated listing endpoint
//!
//! The europarl site serves a member's past meetings through a "load more"
//! endpoint that returns one HTML fragment per page. Link planning is pure:
//! given a member id and a page count it synthesizes the exact ordered list
//! of URLs a run will fetch, with no I/O involved.

use crate::links::MemberId;
use url::Url;

/// The fixed listing endpoint all page URLs are built from
pub const LISTING_ENDPOINT: &str = "https://www.europarl.europa.eu/meps/en/loadmore-meetings";

/// Parliamentary term the listing is filtered to
const TERM_ID: &str = "10";

/// Records per page served by the endpoint
const PAGE_SIZE: &str = "10";

/// One planned page fetch
///
/// `page` is the 1-indexed generation index; by construction it coincides
/// with the `page` query parameter embedded in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// The fully encoded URL to fetch
    pub url: Url,

    /// 1-indexed page number this request corresponds to
    pub page: u32,
}

/// Plans the ordered sequence of page requests for one run
///
/// Produces exactly `pages` requests for pages `1..=pages`, in ascending
/// order, differing only in the `page` query parameter. Reserved characters
/// are percent-encoded by the `url` crate. `pages == 0` yields an empty
/// sequence; the configuration layer rejects it before a run gets here.
///
/// # Example
///
/// ```
/// use mep_meetings::links::{plan_links, MemberId};
///
/// let member = MemberId::from_seed_url("https://example.com/256864/").unwrap();
/// let requests = plan_links(&member, 2);
/// assert_eq!(requests.len(), 2);
/// assert!(requests[0].url.as_str().contains("page=1"));
/// assert!(requests[1].url.as_str().contains("page=2"));
/// ```
pub fn plan_links(member: &MemberId, pages: u32) -> Vec<PageRequest> {
    (1..=pages)
        .map(|page| PageRequest {
            url: listing_url(member, page),
            page,
        })
        .collect()
}

/// Builds the listing URL for a single page
fn listing_url(member: &MemberId, page: u32) -> Url {
    let page = page.to_string();
    Url::parse_with_params(
        LISTING_ENDPOINT,
        &[
            ("meetingType", "PAST"),
            ("memberId", member.as_str()),
            ("termId", TERM_ID),
            ("page", page.as_str()),
            ("pageSize", PAGE_SIZE),
        ],
    )
    .expect("listing endpoint and fixed params are a valid URL")
}
