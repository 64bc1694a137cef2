//! Lookup client configuration.

use crate::error::{ApplicantResult, TransportError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://api.zippopotam.us";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Settings for [`LookupClient`](crate::lookup::LookupClient).
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes:
///
/// ```rust
/// use applicant_core::lookup::LookupConfig;
///
/// let config = LookupConfig::from_json_str(r#"{"cache_enabled": true}"#).unwrap();
/// assert!(config.cache_enabled);
/// assert_eq!(config.timeout_ms, 5000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Scheme and host of the city/state-by-ZIP service, without a path.
    pub base_url: String,

    /// Applied to both connect and read.
    pub timeout_ms: u64,

    pub user_agent: String,

    /// Keep resolved ZIP codes in memory for the lifetime of the client.
    pub cache_enabled: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("applicant-core/{}", env!("CARGO_PKG_VERSION")),
            cache_enabled: false,
        }
    }
}

impl LookupConfig {
    /// Parse a configuration document and check it.
    pub fn from_json_str(json: &str) -> ApplicantResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the transport cannot work with.
    pub fn validate(&self) -> Result<(), TransportError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TransportError::configuration(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(TransportError::configuration("timeout_ms must be positive"));
        }
        Ok(())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// `{base_url}/us/{zip5}`
    pub fn zip_url(&self, zip5: &str) -> String {
        format!("{}/us/{}", self.base_url.trim_end_matches('/'), zip5)
    }
}
