//! Member-id derivation from a seed URL
//!
//! A MEP profile URL embeds the member's numeric id as its own path segment,
//! e.g. `https://www.europarl.europa.eu/meps/en/256864/NAME/meetings/past`.
//! That id is the only thing the listing endpoint needs, so it is derived
//! once up front and the seed URL plays no further role in the run.

use crate::LinkError;
use regex::Regex;
use std::sync::OnceLock;

/// The numeric identifier of one Member of the European Parliament
///
/// Immutable once derived; construction fails if the seed URL does not
/// contain a `/<digits>/` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberId(String);

fn member_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/(\d+)/").expect("member id pattern is valid"))
}

impl MemberId {
    /// Derives the member id from a seed URL
    ///
    /// Matches the first `/<digits>/` segment in the URL. Derivation is
    /// deterministic and pure; the same seed URL always yields the same id.
    ///
    /// # Example
    ///
    /// ```
    /// use mep_meetings::links::MemberId;
    ///
    /// let id = MemberId::from_seed_url(
    ///     "https://www.europarl.europa.eu/meps/en/256864/NAME/meetings/past",
    /// )
    /// .unwrap();
    /// assert_eq!(id.as_str(), "256864");
    /// ```
    pub fn from_seed_url(seed_url: &str) -> Result<Self, LinkError> {
        member_id_pattern()
            .captures(seed_url)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
            .ok_or_else(|| LinkError::MemberIdNotFound(seed_url.to_string()))
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
