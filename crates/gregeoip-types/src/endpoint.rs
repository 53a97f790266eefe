use crate::DOCS_BASE_URL;
use std::fmt;

/// Remote endpoint, one per public operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Geolocates the caller's own address.
    GeoIp,
    /// Geolocates an explicit address.
    IpLookup,
    /// Country reference data.
    Country,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GeoIp => "GeoIP",
            Endpoint::IpLookup => "IPLookup",
            Endpoint::Country => "Country",
        }
    }

    /// Documentation page for this operation's options.
    pub fn docs_url(&self) -> String {
        let page = match self {
            Endpoint::GeoIp => "geoip-method",
            Endpoint::IpLookup => "lookup-method",
            Endpoint::Country => "country-method",
        };
        format!("{}/{}#options", DOCS_BASE_URL, page)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
