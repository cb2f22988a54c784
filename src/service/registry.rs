use derive_new::new;
use tracing::instrument;

use super::store::{ImpressionLedger, Store};
use crate::model::{Campaign, Stats, Timestamp};

/// Creates campaigns together with their ledger and stats record.
#[derive(Debug, Clone, new)]
pub struct CampaignRegistry {
    store: Store,
}

impl CampaignRegistry {
    /// Inputs are trusted; validation happens at the API boundary.
    #[instrument(skip(self))]
    pub fn create(&self, name: String, start_time: Timestamp) -> Campaign {
        let campaign = Campaign::new(name, start_time);
        let id = campaign.id;

        self.store.with_state(|state| {
            state.campaigns.insert(id, campaign.clone());
            state.impressions.insert(id, ImpressionLedger::default());
            state.stats.insert(id, Stats::new(id));
        });

        tracing::info!(campaign = ?campaign, "created campaign `{}`", id);
        campaign
    }
}
