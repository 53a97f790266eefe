use gregeoip_types::{Endpoint, GeoIpError, GeoIpResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> GeoIpResult<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(GeoIpError::Configuration("Base URL cannot be empty".into()));
        }

        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(GeoIpError::Configuration(format!(
                "Base URL must start with http:// or https://, got {}",
                base
            )));
        }

        if self.timeout_secs == 0 {
            return Err(GeoIpError::Configuration("Timeout cannot be 0".into()));
        }

        Ok(())
    }

    /// `<base_url>/<endpoint>` with any trailing slashes on the base removed.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.trim().trim_end_matches('/'), endpoint.path())
    }
}
