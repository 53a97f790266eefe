#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Shared vocabulary for the GRE GeoIP SDK: the closed option enumerations,
//! endpoint names, the API key wrapper and the error type.

mod api_key;
mod endpoint;
mod error;
mod modules;

pub use api_key::ApiKey;
pub use endpoint::Endpoint;
pub use error::{GeoIpError, GeoIpResult};
pub use modules::{CountryModule, Format, GeoIpModule, Language, Mode, OptionValue};

/// Default API host. Trailing slashes on configured hosts are trimmed before use.
pub const DEFAULT_BASE_URL: &str = "https://gregeoip.com";

/// Value of the `source` query parameter sent with every request.
pub const SOURCE_TAG: &str = "Rust-Package";

/// Root of the hosted SDK documentation referenced from validation errors.
pub const DOCS_BASE_URL: &str = "https://geoip-docs.gredev.io/sdks/js";

/// Reference for the `countryCode` shape check.
pub const ISO_3166_ALPHA2_URL: &str = "https://en.wikipedia.org/wiki/ISO_3166-1_alpha-2";

/// Shortest `ip` value accepted by `lookup`.
pub const MIN_IP_LENGTH: usize = 7;

/// Exact length of an ISO 3166-1 alpha-2 country code.
pub const COUNTRY_CODE_LENGTH: usize = 2;

/// Default transport timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
