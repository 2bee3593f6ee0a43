//! Site capability seam
//!
//! Link construction and page parsing are the only site-specific operations
//! in the pipeline. They are grouped behind the [`Site`] trait so the
//! orchestrator stays generic; the concrete implementation is chosen at
//! construction time.

use crate::links::{plan_links, MemberId, PageRequest};
use crate::scraper::parser::{parse_page, Meeting};
use crate::LinkError;

/// The two site-specific operations of a scrape run
pub trait Site {
    /// Plans the ordered sequence of page URLs to fetch
    ///
    /// Pure and deterministic; must return exactly `pages` requests with
    /// ascending 1-indexed page numbers.
    fn plan_links(&self, pages: u32) -> Vec<PageRequest>;

    /// Extracts the records from one fetched page body
    ///
    /// Must never fail: unparseable pages yield an empty sequence and
    /// unextractable fields yield `None` values.
    fn parse_page(&self, body: &str, request: &PageRequest) -> Vec<Meeting>;
}

/// The European Parliament past-meetings listing
#[derive(Debug, Clone)]
pub struct EuroparlSite {
    member: MemberId,
}

impl EuroparlSite {
    /// Builds the site from a member's profile seed URL
    ///
    /// The seed URL is used only to derive the member id; it is never
    /// fetched. Fails before any network activity if the id cannot be
    /// derived.
    pub fn from_seed_url(seed_url: &str) -> Result<Self, LinkError> {
        Ok(Self {
            member: MemberId::from_seed_url(seed_url)?,
        })
    }

    /// The member this site instance scrapes
    pub fn member(&self) -> &MemberId {
        &self.member
    }
}

impl Site for EuroparlSite {
    fn plan_links(&self, pages: u32) -> Vec<PageRequest> {
        plan_links(&self.member, pages)
    }

    fn parse_page(&self, body: &str, request: &PageRequest) -> Vec<Meeting> {
        parse_page(body, request)
    }
}
