use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Body shared by every response, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug)]
pub struct Reply<T> {
    status: StatusCode,
    message: &'static str,
    data: Option<T>,
}

impl<T> Reply<T> {
    pub fn data(status: StatusCode, data: T) -> Self {
        Self {
            status,
            message: "request successful",
            data: Some(data),
        }
    }
}

impl Reply<()> {
    pub fn message(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let content = Envelope {
            success: true,
            message: self.message.to_owned(),
            data: self.data,
        };

        (self.status, Json(content)).into_response()
    }
}
