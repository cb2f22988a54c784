use axum::extract::{Path, State};
use axum::http::StatusCode;
use snafu::{ensure, OptionExt as _};
use tracing::instrument;

use super::{ApiError, App, CampaignNotFoundSnafu, InvalidCampaignIdSnafu, Reply, Result};
use crate::model::{CampaignId, Stats};

#[instrument(skip(app))]
pub async fn show(
    State(app): State<App>,
    Path(campaign_id): Path<String>,
) -> Result<Reply<Stats>> {
    ensure!(!campaign_id.is_empty(), InvalidCampaignIdSnafu);

    let stats = campaign_id
        .parse::<CampaignId>()
        .ok()
        .and_then(|id| app.reader.get(&id));
    let stats = stats.context(CampaignNotFoundSnafu { campaign_id })?;

    Ok(Reply::data(StatusCode::OK, stats))
}

pub async fn missing_id() -> ApiError {
    ApiError::InvalidCampaignId
}
