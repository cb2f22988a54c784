use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use snafu::{ensure, OptionExt as _, ResultExt as _};
use tracing::instrument;

use super::{App, InvalidPayloadSnafu, Reply, Result, ValidationSnafu};
use crate::model::{Campaign, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCampaign {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_time: Option<Timestamp>,
}

#[instrument(skip(app))]
pub async fn create(
    State(app): State<App>,
    payload: Result<Json<CreateCampaign>, JsonRejection>,
) -> Result<Reply<Campaign>> {
    let Json(CreateCampaign { name, start_time }) = payload.context(InvalidPayloadSnafu)?;

    ensure!(!name.is_empty(), ValidationSnafu { field: "name" });
    let start_time = start_time.context(ValidationSnafu {
        field: "start_time",
    })?;

    let campaign = app.registry.create(name, start_time);
    Ok(Reply::data(StatusCode::CREATED, campaign))
}
