use derive_new::new;
use tracing::instrument;

use super::store::Store;
use crate::model::{CampaignId, Stats};

#[derive(Debug, Clone, new)]
pub struct StatsReader {
    store: Store,
}

impl StatsReader {
    /// Snapshot of a campaign's counters, or `None` for an unknown campaign.
    #[instrument(skip(self))]
    pub fn get(&self, campaign_id: &CampaignId) -> Option<Stats> {
        self.store
            .with_state(|state| state.stats.get(campaign_id).copied())
    }
}
