use derive_new::new;
use tracing::instrument;

use super::store::Store;
use crate::model::{Impression, ImpressionTtl, Stats, Timestamp, TrackOutcome};

/// Decides whether an impression counts, and counts it.
///
/// A user's impression is accepted when the user has no ledger entry for the
/// campaign or the entry is at least one TTL old. Accepting refreshes the entry
/// and bumps every counter. A suppressed duplicate changes nothing, so a burst
/// of duplicates does not push the window forward.
#[derive(Debug, Clone, new)]
pub struct ImpressionDeduplicator {
    store: Store,
    ttl: ImpressionTtl,
}

impl ImpressionDeduplicator {
    pub fn ttl(&self) -> ImpressionTtl {
        self.ttl
    }

    #[instrument(skip(self), fields(ttl = %self.ttl))]
    pub fn track(&self, impression: &Impression, now: Timestamp) -> TrackOutcome {
        let campaign_id = impression.campaign_id;
        let user_id = impression.user_id.as_str();

        let outcome = self.store.with_state(|state| {
            if !state.campaigns.contains_key(&campaign_id) {
                return TrackOutcome::CampaignNotFound;
            }

            let ledger = state.impressions.entry(campaign_id).or_default();
            if let Some(last_seen) = ledger.last_seen(user_id) {
                if self.ttl.covers(last_seen, now) {
                    return TrackOutcome::DuplicateSuppressed;
                }
            }

            ledger.refresh(user_id, now);
            state
                .stats
                .entry(campaign_id)
                .or_insert_with(|| Stats::new(campaign_id))
                .record_impression();

            TrackOutcome::Accepted
        });

        match outcome {
            TrackOutcome::Accepted => {
                tracing::debug!(ad_id = %impression.ad_id, "accepted impression for campaign `{}`", campaign_id)
            }
            TrackOutcome::DuplicateSuppressed => {
                tracing::debug!(ad_id = %impression.ad_id, "suppressed duplicate impression for campaign `{}`", campaign_id)
            }
            TrackOutcome::CampaignNotFound => {
                tracing::info!("impression for unknown campaign `{}`", campaign_id)
            }
        }

        outcome
    }
}
