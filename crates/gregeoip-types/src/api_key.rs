use crate::{GeoIpError, GeoIpResult};
use std::fmt;

/// The account credential. Never printed: `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accepts any string of non-zero length.
    pub fn new(key: impl Into<String>) -> GeoIpResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(GeoIpError::Configuration(
                "You should pass the API Key.".into(),
            ));
        }
        Ok(Self(key))
    }

    /// Raw value, for the outbound query string only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}
