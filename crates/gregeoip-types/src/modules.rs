use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed set of string values accepted by the API for one option.
pub trait OptionValue: Copy + Sized + 'static {
    /// Every allowed value, in documentation order.
    const ALL: &'static [Self];

    /// Wire representation.
    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive match against the wire representation.
    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// Renders the allowed set as "`a`, `b` or `c`".
    fn choices(conjunction: &str) -> String {
        let quoted: Vec<String> = Self::ALL.iter().map(|v| format!("`{}`", v.as_str())).collect();
        match quoted.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                format!("{} {} {}", rest.join(", "), conjunction, last)
            }
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    }
}

/// Feature modules for the `GeoIP` and `IPLookup` endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoIpModule {
    /// Geographic location.
    Location,
    /// Proxy / VPN / threat flags.
    Security,
    /// Time zone of the address.
    Timezone,
    /// Local currency.
    Currency,
    /// User-agent derived device info.
    Device,
}

impl OptionValue for GeoIpModule {
    const ALL: &'static [Self] = &[
        GeoIpModule::Location,
        GeoIpModule::Security,
        GeoIpModule::Timezone,
        GeoIpModule::Currency,
        GeoIpModule::Device,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            GeoIpModule::Location => "location",
            GeoIpModule::Security => "security",
            GeoIpModule::Timezone => "timezone",
            GeoIpModule::Currency => "currency",
            GeoIpModule::Device => "device",
        }
    }
}

/// Feature modules for the `Country` endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryModule {
    /// Spoken languages.
    Language,
    /// Flag assets.
    Flag,
    /// National currency.
    Currency,
    /// Time zones.
    Timezone,
}

impl OptionValue for CountryModule {
    const ALL: &'static [Self] = &[
        CountryModule::Language,
        CountryModule::Flag,
        CountryModule::Currency,
        CountryModule::Timezone,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            CountryModule::Language => "language",
            CountryModule::Flag => "flag",
            CountryModule::Currency => "currency",
            CountryModule::Timezone => "timezone",
        }
    }
}

/// Response body format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Format {
    /// Decoded into a structured value by the client.
    #[default]
    #[serde(rename = "JSON")]
    Json,
    /// Returned as text.
    #[serde(rename = "XML")]
    Xml,
    /// Returned as text.
    #[serde(rename = "CSV")]
    Csv,
    /// Returned as text.
    #[serde(rename = "Newline")]
    Newline,
}

impl OptionValue for Format {
    const ALL: &'static [Self] = &[Format::Json, Format::Xml, Format::Csv, Format::Newline];

    fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Xml => "XML",
            Format::Csv => "CSV",
            Format::Newline => "Newline",
        }
    }
}

/// Response language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Arabic.
    Ar,
    /// German.
    De,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// Japanese.
    Ja,
    /// Chinese.
    Zh,
    /// Russian.
    Ru,
}

impl OptionValue for Language {
    const ALL: &'static [Self] = &[
        Language::En,
        Language::Ar,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::Ja,
        Language::Zh,
        Language::Ru,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
            Language::De => "DE",
            Language::Fr => "FR",
            Language::Es => "ES",
            Language::Ja => "JA",
            Language::Zh => "ZH",
            Language::Ru => "RU",
        }
    }
}

/// Live data or the sandbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Production data.
    #[default]
    Live,
    /// Sandbox responses.
    Test,
}

impl OptionValue for Mode {
    const ALL: &'static [Self] = &[Mode::Live, Mode::Test];

    fn as_str(&self) -> &'static str {
        match self {
            Mode::Live => "live",
            Mode::Test => "test",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(GeoIpModule, CountryModule, Format, Language, Mode);

impl FromStr for GeoIpModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| format!("unknown module: {}", s))
    }
}

impl FromStr for CountryModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| format!("unknown module: {}", s))
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| format!("unknown format: {}", s))
    }
}

// Language codes are case-insensitive on input.
impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(&s.to_uppercase()).ok_or_else(|| format!("unknown language: {}", s))
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| format!("unknown mode: {}", s))
    }
}
