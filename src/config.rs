use serde::Serialize;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Where map imagery comes from and the credit line the provider requires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileConfig {
    pub url: String,
    pub attribution: String,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub service_url: Url,
    pub request_timeout: Option<Duration>,
    pub log_level: String,
    pub tiles: TileConfig,
}

impl AppConfig {
    /// Read `.env` (if any) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup so tests never touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |var: &str, default: &str| -> String {
            lookup(var).unwrap_or_else(|| default.to_string())
        };

        let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        };

        let bind_addr = or_default("FINDPLACE_BIND_ADDR", "127.0.0.1:3000")
            .parse::<SocketAddr>()
            .map_err(|e| invalid("FINDPLACE_BIND_ADDR", e.to_string()))?;

        let max_workers = or_default("FINDPLACE_MAX_WORKERS", "8")
            .parse::<usize>()
            .map_err(|e| invalid("FINDPLACE_MAX_WORKERS", e.to_string()))?;
        if max_workers == 0 {
            return Err(invalid("FINDPLACE_MAX_WORKERS", "must be at least 1".into()));
        }

        let service_url = Url::parse(&or_default(
            "FINDPLACE_SERVICE_URL",
            "http://127.0.0.1:8000/api/scrape",
        ))
        .map_err(|e| invalid("FINDPLACE_SERVICE_URL", e.to_string()))?;

        let request_timeout = match lookup("FINDPLACE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .map_err(|e| invalid("FINDPLACE_REQUEST_TIMEOUT_SECS", e.to_string()))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let log_level = or_default("FINDPLACE_LOG_LEVEL", "info");

        let tiles = TileConfig {
            url: or_default("FINDPLACE_TILE_URL", DEFAULT_TILE_URL),
            attribution: or_default("FINDPLACE_TILE_ATTRIBUTION", DEFAULT_TILE_ATTRIBUTION),
        };

        Ok(Self {
            bind_addr,
            max_workers,
            service_url,
            request_timeout,
            log_level,
            tiles,
        })
    }
}
