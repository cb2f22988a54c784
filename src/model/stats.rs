use derive_new::new;
use serde::{Deserialize, Serialize};

use super::CampaignId;

/// Running counters of accepted impressions for one campaign.
///
/// `last_hour` and `last_day` move in lockstep with `total_count`; they are
/// cumulative and never decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Stats {
    pub campaign_id: CampaignId,
    #[new(default)]
    pub last_hour: u64,
    #[new(default)]
    pub last_day: u64,
    #[new(default)]
    pub total_count: u64,
}

impl Stats {
    pub(crate) fn record_impression(&mut self) {
        self.last_hour += 1;
        self.last_day += 1;
        self.total_count += 1;
    }
}
