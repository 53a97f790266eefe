use thiserror::Error;

/// Everything a GeoIP call can fail with.
///
/// Validation variants carry a human readable message that names the
/// offending value and where to read more. `RequestFailed` is deliberately
/// opaque: the underlying cause goes to the client's diagnostics sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoIpError {
    /// Client could not be constructed (missing key, bad base URL, ...).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown feature module or malformed identifier.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// `format` outside the allowed set.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// `lang` outside the allowed set.
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// `mode` outside the allowed set.
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    /// A required identifier was absent or too short.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Transport failure, non-200 status or undecodable body.
    #[error("An unknown error occurred while sending the request to GRE GeoIP API.")]
    RequestFailed,
}

impl GeoIpError {
    /// True for errors raised locally before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeoIpError::InvalidParameter(_)
                | GeoIpError::InvalidFormat(_)
                | GeoIpError::InvalidLanguage(_)
                | GeoIpError::InvalidMode(_)
                | GeoIpError::MissingParameter(_)
        )
    }
}

/// Result alias used across the SDK.
pub type GeoIpResult<T> = Result<T, GeoIpError>;
