//! Per-call options and their validation.
//!
//! Options are kept as raw strings so callers can pass through user input
//! unchanged; every check runs at call time and the first violation wins.

use gregeoip_types::{
    Endpoint, Format, GeoIpError, GeoIpResult, Language, Mode, OptionValue,
    COUNTRY_CODE_LENGTH, ISO_3166_ALPHA2_URL, MIN_IP_LENGTH,
};

/// Options shared by all three operations. `geoip` takes these directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub params: Vec<String>,
    pub format: Option<String>,
    pub lang: Option<String>,
    pub mode: Option<String>,
}

pub type GeoIpOptions = RequestOptions;

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Checks params, format, lang and mode, in that order.
    pub(crate) fn validate<M: OptionValue>(&self, endpoint: Endpoint) -> GeoIpResult<ValidatedOptions> {
        let params = validate_params::<M>(&self.params, endpoint)?;

        let format_raw = non_empty(&self.format).unwrap_or(Format::default().as_str());
        let format = Format::from_wire(format_raw).ok_or_else(|| {
            GeoIpError::InvalidFormat(format!(
                "The `format` option value \"{}\" you specified is unknown.\nYou can use: {}.\nRead more at: {}",
                format_raw,
                Format::choices("or"),
                endpoint.docs_url()
            ))
        })?;

        let lang_raw = non_empty(&self.lang)
            .unwrap_or(Language::default().as_str())
            .to_uppercase();
        let lang = Language::from_wire(&lang_raw).ok_or_else(|| {
            GeoIpError::InvalidLanguage(format!(
                "The `lang` option value \"{}\" you specified is unknown.\nYou can use: {}.\nRead more at: {}",
                lang_raw,
                Language::choices("or"),
                endpoint.docs_url()
            ))
        })?;

        let mode_raw = non_empty(&self.mode).unwrap_or(Mode::default().as_str());
        let mode = Mode::from_wire(mode_raw).ok_or_else(|| {
            GeoIpError::InvalidMode(format!(
                "The `mode` option value \"{}\" you specified is unknown.\nYou can use: {}.\nRead more at: {}",
                mode_raw,
                Mode::choices("or"),
                endpoint.docs_url()
            ))
        })?;

        Ok(ValidatedOptions {
            params,
            format,
            lang,
            mode,
        })
    }
}

/// Options for `lookup`: an explicit address plus the shared options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub ip: Option<String>,
    pub options: RequestOptions,
}

impl LookupOptions {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    // Length check only; "1.2.3.4" passes, so does any 7-char string.
    pub(crate) fn validated_ip(&self) -> GeoIpResult<String> {
        let ip = non_empty(&self.ip).unwrap_or_default();
        if ip.chars().count() < MIN_IP_LENGTH {
            return Err(GeoIpError::MissingParameter(
                "You should pass the `ip` parameter.".into(),
            ));
        }
        Ok(ip.to_string())
    }
}

/// Options for `country`: an ISO 3166-1 alpha-2 code plus the shared options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryOptions {
    pub country_code: Option<String>,
    pub options: RequestOptions,
}

impl CountryOptions {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: Some(country_code.into()),
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn validated_country_code(&self) -> GeoIpResult<String> {
        let code = non_empty(&self.country_code).unwrap_or_default().to_uppercase();
        if code.chars().count() != COUNTRY_CODE_LENGTH {
            return Err(GeoIpError::InvalidParameter(format!(
                "You should pass the `countryCode` parameter. Also, it should be a `ISO 3166-1 alpha-2` format.\nRead more at: {}",
                ISO_3166_ALPHA2_URL
            )));
        }
        Ok(code)
    }
}

macro_rules! delegate_setters {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn params<I, S>(mut self, params: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    self.options = self.options.params(params);
                    self
                }

                pub fn format(mut self, format: impl Into<String>) -> Self {
                    self.options = self.options.format(format);
                    self
                }

                pub fn lang(mut self, lang: impl Into<String>) -> Self {
                    self.options = self.options.lang(lang);
                    self
                }

                pub fn mode(mut self, mode: impl Into<String>) -> Self {
                    self.options = self.options.mode(mode);
                    self
                }
            }
        )*
    };
}

delegate_setters!(LookupOptions, CountryOptions);

/// Options after defaulting, normalization and validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ValidatedOptions {
    pub params: Vec<&'static str>,
    pub format: Format,
    pub lang: Language,
    pub mode: Mode,
}

fn validate_params<M: OptionValue>(params: &[String], endpoint: Endpoint) -> GeoIpResult<Vec<&'static str>> {
    params
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| {
            M::from_wire(p).map(|m| m.as_str()).ok_or_else(|| {
                GeoIpError::InvalidParameter(format!(
                    "The \"{}\" module you used is unknown.\nYou can use: {}.\nRead more at: {}",
                    p,
                    M::choices("and/or"),
                    endpoint.docs_url()
                ))
            })
        })
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gregeoip_types::{CountryModule, GeoIpModule};
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let v = RequestOptions::new().validate::<GeoIpModule>(Endpoint::GeoIp).unwrap();
        assert!(v.params.is_empty());
        assert_eq!(v.format, Format::Json);
        assert_eq!(v.lang, Language::En);
        assert_eq!(v.mode, Mode::Live);
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let v = RequestOptions::new()
            .format("")
            .lang("")
            .mode("")
            .validate::<GeoIpModule>(Endpoint::GeoIp)
            .unwrap();
        assert_eq!(v.format, Format::Json);
        assert_eq!(v.lang, Language::En);
        assert_eq!(v.mode, Mode::Live);
    }

    #[test]
    fn test_empty_params_are_skipped() {
        let v = RequestOptions::new()
            .params(["", "location", "", "device"])
            .validate::<GeoIpModule>(Endpoint::GeoIp)
            .unwrap();
        assert_eq!(v.params, vec!["location", "device"]);
    }

    #[test]
    fn test_unknown_param_names_value_and_docs() {
        let err = RequestOptions::new()
            .params(["location", "weather"])
            .validate::<GeoIpModule>(Endpoint::IpLookup)
            .unwrap_err();
        match err {
            GeoIpError::InvalidParameter(msg) => {
                assert!(msg.contains("\"weather\""));
                assert!(msg.contains("lookup-method#options"));
                assert!(msg.contains("and/or `device`"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_country_modules_checked_against_country_set() {
        let err = RequestOptions::new()
            .params(["location"])
            .validate::<CountryModule>(Endpoint::Country)
            .unwrap_err();
        assert!(matches!(err, GeoIpError::InvalidParameter(_)));

        let v = RequestOptions::new()
            .params(["flag", "language"])
            .validate::<CountryModule>(Endpoint::Country)
            .unwrap();
        assert_eq!(v.params, vec!["flag", "language"]);
    }

    #[test]
    fn test_format_error_names_format_value() {
        let err = RequestOptions::new()
            .format("YAML")
            .validate::<GeoIpModule>(Endpoint::GeoIp)
            .unwrap_err();
        match err {
            GeoIpError::InvalidFormat(msg) => assert!(msg.contains("\"YAML\"")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_language_and_mode() {
        let err = RequestOptions::new()
            .lang("it")
            .validate::<GeoIpModule>(Endpoint::GeoIp)
            .unwrap_err();
        match err {
            GeoIpError::InvalidLanguage(msg) => assert!(msg.contains("\"IT\"")),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = RequestOptions::new()
            .mode("staging")
            .validate::<GeoIpModule>(Endpoint::GeoIp)
            .unwrap_err();
        assert!(matches!(err, GeoIpError::InvalidMode(_)));
    }

    #[test]
    fn test_first_violation_wins() {
        let err = RequestOptions::new()
            .params(["bogus"])
            .format("YAML")
            .lang("xx")
            .mode("nope")
            .validate::<GeoIpModule>(Endpoint::GeoIp)
            .unwrap_err();
        assert!(matches!(err, GeoIpError::InvalidParameter(_)));

        let err = RequestOptions::new()
            .lang("xx")
            .mode("nope")
            .validate::<GeoIpModule>(Endpoint::GeoIp)
            .unwrap_err();
        assert!(matches!(err, GeoIpError::InvalidLanguage(_)));
    }

    #[test]
    fn test_ip_length_check() {
        assert!(matches!(
            LookupOptions::new("1.2.3").validated_ip(),
            Err(GeoIpError::MissingParameter(_))
        ));
        assert!(matches!(
            LookupOptions::default().validated_ip(),
            Err(GeoIpError::MissingParameter(_))
        ));
        assert_eq!(LookupOptions::new("8.8.8.8").validated_ip().unwrap(), "8.8.8.8");
    }

    #[test]
    fn test_country_code_normalization() {
        assert_eq!(CountryOptions::new("us").validated_country_code().unwrap(), "US");
        assert!(matches!(
            CountryOptions::new("USA").validated_country_code(),
            Err(GeoIpError::InvalidParameter(_))
        ));
        assert!(matches!(
            CountryOptions::default().validated_country_code(),
            Err(GeoIpError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_delegated_setters() {
        let opts = LookupOptions::new("8.8.8.8").params(["location"]).lang("fr").mode("test");
        assert_eq!(opts.options.params, vec!["location".to_string()]);
        assert_eq!(opts.options.lang.as_deref(), Some("fr"));
        assert_eq!(opts.options.mode.as_deref(), Some("test"));
    }

    proptest! {
        #[test]
        fn prop_unknown_module_always_rejected(
            name in "[a-z]{1,12}".prop_filter("must be unknown", |n| GeoIpModule::from_wire(n).is_none())
        ) {
            let result = RequestOptions::new()
                .params(vec!["location".to_string(), name])
                .validate::<GeoIpModule>(Endpoint::GeoIp);
            prop_assert!(matches!(result, Err(GeoIpError::InvalidParameter(_))));
        }

        #[test]
        fn prop_short_ip_rejected(ip in ".{0,6}") {
            let result = LookupOptions::new(ip).validated_ip();
            prop_assert!(matches!(result, Err(GeoIpError::MissingParameter(_))));
        }
    }
}
