use std::net::SocketAddr;

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;
use snafu::ResultExt as _;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::error::{ApplicationError, BindAddressSnafu, WebServerSnafu};

mod campaigns;
mod error;
mod impressions;
mod response;
mod state;
mod stats;

pub use campaigns::CreateCampaign;
pub use error::*;
pub use impressions::TrackImpression;
pub use response::*;
pub use state::*;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

pub fn create_router(app: App) -> Router {
    Router::new()
        .route("/api/v1/campaigns", post(campaigns::create))
        .route("/api/v1/impressions", post(impressions::track))
        .route("/api/v1/campaigns/stats", get(stats::missing_id))
        .route("/api/v1/campaigns/stats/", get(stats::missing_id))
        .route("/api/v1/campaigns/stats/:campaign_id", get(stats::show))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_owned(),
    }
}

/// Serves the API on `address` until Ctrl-C.
#[instrument(skip(app))]
pub async fn serve(address: SocketAddr, app: App) -> Result<(), ApplicationError> {
    let listener = TcpListener::bind(address)
        .await
        .context(BindAddressSnafu { address })?;

    tracing::info!(ttl = %app.deduplicator.ttl(), "listening on {}", address);

    axum::serve(listener, create_router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(WebServerSnafu)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "failed to listen for the shutdown signal");
    }
    tracing::info!("shutting down");
}
