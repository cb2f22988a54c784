use derive_new::new;
use serde::{Deserialize, Serialize};
use snafu::Snafu;
use uuid::Uuid;

use super::Timestamp;

/// Identifier of a campaign, generated by the registry and never supplied by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(Uuid);

impl CampaignId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::str::FromStr for CampaignId {
    type Err = ParseCampaignId;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .parse()
            .map(CampaignId)
            .map_err(|_| ParseCampaignId::new(input.to_string()))
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Snafu, new)]
#[snafu(display("Failed to parse campaign id: {}", text))]
pub struct ParseCampaignId {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Campaign {
    #[new(value = "CampaignId::generate()")]
    pub id: CampaignId,
    pub name: String,
    pub start_time: Timestamp,
}
