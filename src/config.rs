//! Client configuration loaded from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

/// Default API origin when `CAMPUS_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Configuration for the API transport and credential persistence.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, no trailing slash.
    pub base_url: String,
    /// Client-side timeout applied to every request.
    pub timeout: Duration,
    /// File the credential is persisted to. `None` keeps it in memory only.
    pub credential_path: Option<PathBuf>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            credential_path: None,
        }
    }

    /// Load from `CAMPUS_API_URL`, `CAMPUS_TIMEOUT_MS` and
    /// `CAMPUS_TOKEN_FILE`. Missing variables fall back to defaults;
    /// an unparseable timeout is reported and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CAMPUS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let mut config = Self::new(&base_url);

        if let Ok(raw) = std::env::var("CAMPUS_TIMEOUT_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => config.timeout = Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(value = %raw, "invalid CAMPUS_TIMEOUT_MS — using default");
                }
            }
        }
        if let Ok(path) = std::env::var("CAMPUS_TOKEN_FILE") {
            config.credential_path = Some(PathBuf::from(path));
        }
        config
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_credential_path(mut self, path: PathBuf) -> Self {
        self.credential_path = Some(path);
        self
    }
}
