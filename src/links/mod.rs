//! Link construction module
//!
//! This module derives the member id from a seed URL and plans the ordered
//! sequence of listing-page URLs a run will fetch.

mod member;
mod planner;

pub use member::MemberId;
pub use planner::{plan_links, PageRequest, LISTING_ENDPOINT};
