//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use cbol_core::session::default_session_path;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the console's backend connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base path every endpoint hangs off (e.g. "http://127.0.0.1:8080/api").
    pub base_url: String,
    /// File holding the persisted session token.
    pub session_file: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            session_file: default_session_path(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                 | Default                          |
    /// |--------------------------|----------------------------------|
    /// | `CBOL_API_BASE_URL`      | `http://127.0.0.1:8080/api`      |
    /// | `CBOL_SESSION_FILE`      | `<data_dir>/cbol/session.json`   |
    /// | `CBOL_HTTP_TIMEOUT_SECS` | `30`                             |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("CBOL_API_BASE_URL").unwrap_or(defaults.base_url),
            session_file: std::env::var_os("CBOL_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            timeout: std::env::var("CBOL_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
