pub mod deduplicator;
pub mod reader;
pub mod registry;
pub mod store;

pub use deduplicator::ImpressionDeduplicator;
pub use reader::StatsReader;
pub use registry::CampaignRegistry;
pub use store::Store;
