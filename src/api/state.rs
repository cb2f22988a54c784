use std::sync::Arc;

use crate::model::ImpressionTtl;
use crate::service::{CampaignRegistry, ImpressionDeduplicator, StatsReader, Store};
use crate::time::Clock;

/// Handles shared by every request handler. All three services point at the same store.
#[derive(Debug, Clone)]
pub struct App {
    pub registry: CampaignRegistry,
    pub deduplicator: ImpressionDeduplicator,
    pub reader: StatsReader,
    pub clock: Arc<dyn Clock>,
}

pub fn create_app(store: Store, ttl: ImpressionTtl, clock: Arc<dyn Clock>) -> App {
    App {
        registry: CampaignRegistry::new(store.clone()),
        deduplicator: ImpressionDeduplicator::new(store.clone(), ttl),
        reader: StatsReader::new(store),
        clock,
    }
}
