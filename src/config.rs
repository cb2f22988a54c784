use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{ApplicationError, ConfigLoadSnafu};
use crate::model::ImpressionTtl;

/// Settings read from the process environment (and `.env`, via `dotenvy`).
///
/// | variable         | default        |
/// |------------------|----------------|
/// | `HOST_ADDRESS`   | `0.0.0.0:8080` |
/// | `IMPRESSION_TTL` | `3600` seconds |
/// | `LOG_DIR`        | `logs`         |
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(rename = "host_address", default = "default_host")]
    pub host: SocketAddr,
    #[serde(default = "default_impression_ttl")]
    pub impression_ttl: u64,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config, ApplicationError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Config, ApplicationError> {
        envy::from_iter::<_, Config>(vars).context(ConfigLoadSnafu)
    }

    pub fn ttl(&self) -> ImpressionTtl {
        ImpressionTtl::from_secs(self.impression_ttl)
    }
}

fn default_host() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_impression_ttl() -> u64 {
    3600
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}
