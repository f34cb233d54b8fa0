use std::time::Duration;

use url::Url;

use crate::errors::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Process-wide configuration, resolved once at startup and immutable
/// afterwards. Every consumer receives it by value or reference; nothing
/// reads the environment after this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub refresh_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let refresh_ms = std::env::var("REFRESH_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_MS);

        Self::new(&base_url, Duration::from_millis(refresh_ms))
    }

    pub fn new(base_url: &str, refresh_interval: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("bad API_BASE_URL '{}': {}", base_url, e)))?;

        Ok(Self {
            base_url,
            refresh_interval,
        })
    }
}
