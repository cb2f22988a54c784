use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::model::{Campaign, CampaignId, Stats};

pub use ledger::ImpressionLedger;

mod ledger;

/// The three maps every campaign operation works on.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) campaigns: HashMap<CampaignId, Campaign>,
    pub(crate) impressions: HashMap<CampaignId, ImpressionLedger>,
    pub(crate) stats: HashMap<CampaignId, Stats>,
}

/// Shared in-memory state for campaigns, impression ledgers and stats.
///
/// All access goes through a single lock held for the whole operation, so a
/// check-then-update sequence inside [`Store::with_state`] is atomic with
/// respect to every other operation, regardless of campaign. Cloning the
/// store clones the handle, not the data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<Mutex<StoreState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut state = self.state.lock();
        f(&mut state)
    }

    pub fn campaign_count(&self) -> usize {
        self.with_state(|state| state.campaigns.len())
    }
}
