use std::time::Duration;

use derive_new::new;

use super::{CampaignId, Timestamp};

/// A single (campaign, user, ad) observation.
///
/// `ad_id` is carried for logging only; the ledger keys on campaign and user.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Impression {
    pub campaign_id: CampaignId,
    pub user_id: String,
    pub ad_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    Accepted,
    DuplicateSuppressed,
    CampaignNotFound,
}

/// Window during which a repeated impression from the same user is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImpressionTtl(Duration);

impl ImpressionTtl {
    pub fn from_secs(seconds: u64) -> Self {
        Self(Duration::from_secs(seconds))
    }

    /// Whether an impression at `now` still falls inside the window opened at `last_seen`.
    ///
    /// A clock that moved backwards counts as inside the window.
    pub fn covers(self, last_seen: Timestamp, now: Timestamp) -> bool {
        match (now - last_seen).to_std() {
            Ok(elapsed) => elapsed < self.0,
            Err(_) => true,
        }
    }
}

impl std::fmt::Display for ImpressionTtl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", humantime::format_duration(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> Timestamp {
        Timestamp::parse("2025-01-01T00:00:00Z").unwrap() + chrono::Duration::seconds(seconds)
    }

    #[test]
    fn window_is_half_open() {
        let ttl = ImpressionTtl::from_secs(60);

        assert!(ttl.covers(at(0), at(0)));
        assert!(ttl.covers(at(0), at(59)));
        assert!(!ttl.covers(at(0), at(60)));
        assert!(!ttl.covers(at(0), at(3600)));
    }

    #[test]
    fn backwards_clock_stays_inside_window() {
        let ttl = ImpressionTtl::from_secs(60);
        assert!(ttl.covers(at(100), at(10)));
    }

    #[test]
    fn zero_ttl_never_suppresses() {
        let ttl = ImpressionTtl::from_secs(0);
        assert!(!ttl.covers(at(0), at(0)));
    }

    #[test]
    fn displays_in_human_units() {
        assert_eq!(ImpressionTtl::from_secs(3600).to_string(), "1h");
    }
}
