use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use snafu::{ensure, ResultExt as _};
use tracing::instrument;

use super::{App, CampaignNotFoundSnafu, InvalidPayloadSnafu, Reply, Result, ValidationSnafu};
use crate::model::{CampaignId, Impression, TrackOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackImpression {
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub ad_id: String,
}

/// Both accepted and suppressed impressions answer `200 OK`.
#[instrument(skip(app))]
pub async fn track(
    State(app): State<App>,
    payload: Result<Json<TrackImpression>, JsonRejection>,
) -> Result<Reply<()>> {
    let Json(TrackImpression {
        campaign_id,
        user_id,
        ad_id,
    }) = payload.context(InvalidPayloadSnafu)?;

    for (field, value) in [
        ("campaign_id", &campaign_id),
        ("user_id", &user_id),
        ("ad_id", &ad_id),
    ] {
        ensure!(!value.is_empty(), ValidationSnafu { field });
    }

    // ids are only ever issued as UUIDs, anything else cannot exist
    let Ok(id) = campaign_id.parse::<CampaignId>() else {
        return CampaignNotFoundSnafu { campaign_id }.fail();
    };

    let impression = Impression::new(id, user_id, ad_id);
    match app.deduplicator.track(&impression, app.clock.now()) {
        TrackOutcome::Accepted => Ok(Reply::message(
            StatusCode::OK,
            "impression saved successfully",
        )),
        TrackOutcome::DuplicateSuppressed => {
            Ok(Reply::message(StatusCode::OK, "duplicate impression"))
        }
        TrackOutcome::CampaignNotFound => CampaignNotFoundSnafu { campaign_id }.fail(),
    }
}
