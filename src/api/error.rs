use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use snafu::{Location, Snafu};

#[derive(Debug, Snafu, Serialize)]
#[snafu(visibility(pub(crate)))]
#[serde(tag = "error")]
pub enum ApiError {
    #[snafu(display("invalid JSON payload"))]
    InvalidPayload {
        #[serde(skip)]
        source: JsonRejection,
        #[serde(skip)]
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("field validation for '{field}' failed"))]
    Validation { field: &'static str },

    #[snafu(display("invalid campaign ID"))]
    InvalidCampaignId,

    #[snafu(display("campaign not found"))]
    CampaignNotFound { campaign_id: String },

    #[snafu(display("404 not found"))]
    RouteNotFound { path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload { .. }
            | ApiError::Validation { .. }
            | ApiError::InvalidCampaignId => StatusCode::BAD_REQUEST,
            ApiError::CampaignNotFound { .. } | ApiError::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    success: bool,
    message: String,
    #[serde(flatten)]
    data: &'a ApiError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = ?self, "request rejected: {}", self);

        let content = ErrorResponse {
            success: false,
            message: self.to_string(),
            data: &self,
        };

        (self.status(), Json(content)).into_response()
    }
}
