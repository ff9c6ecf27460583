//! Rate API configuration.

use std::time::Duration;

use crate::url::{DEFAULT_BASE_URL, ISO_DATE_FORMAT};

/// Configuration for the rate API client.
///
/// Passed to [`crate::RateClient::new`]; nothing is read from the process
/// environment here.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL of the API (e.g. `http://localhost:8000/api/v1`).
    pub base_url: String,
    /// Optional key sent in the `X-API-Key` header.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// chrono format string for `start_date` / `end_date` query values.
    pub date_format: String,
    /// Whether to honor proxy settings from the environment.
    pub system_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("fxdash/{}", env!("CARGO_PKG_VERSION")),
            date_format: ISO_DATE_FORMAT.to_string(),
            system_proxy: true,
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the API key. Empty keys are ignored.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets whether environment proxy settings are used.
    #[must_use]
    pub const fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }

    /// Sets the query date format.
    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("date_format", &self.date_format)
            .field("system_proxy", &self.system_proxy)
            .finish()
    }
}
