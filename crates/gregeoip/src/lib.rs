#![forbid(unsafe_code)]
#![warn(clippy::all)]

//! Async client for the GRE GeoIP API.
//!
//! ```no_run
//! use gregeoip::{GeoIpClient, LookupOptions};
//!
//! # async fn run() -> gregeoip::GeoIpResult<()> {
//! let client = GeoIpClient::new("your-api-key")?;
//! let response = client
//!     .lookup(&LookupOptions::new("8.8.8.8").params(["location", "security"]).lang("de"))
//!     .await?;
//! println!("{:?}", response.as_json());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod options;
pub mod query;
pub mod response;
pub mod transport;

pub use client::{GeoIpClient, GeoIpClientBuilder};
pub use config::ClientConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsSink, MemorySink, TracingSink};
pub use options::{CountryOptions, GeoIpOptions, LookupOptions, RequestOptions};
pub use query::QueryString;
pub use response::GeoIpResponse;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};

pub use gregeoip_types::*;
