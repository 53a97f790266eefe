use gregeoip_types::{ApiKey, OptionValue, SOURCE_TAG};

use crate::options::ValidatedOptions;

/// Ordered query parameters for one request.
///
/// `Debug` masks the `key` value; only `encode` ever emits it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    /// `k1=v1&k2=v2`, keys and values percent-encoded.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub(crate) fn for_request(
        identifier: Option<(&'static str, String)>,
        key: &ApiKey,
        options: &ValidatedOptions,
    ) -> Self {
        let mut query = Self::new();
        if let Some((name, value)) = identifier {
            query.push(name, value);
        }
        query
            .push("key", key.expose())
            .push("params", options.params.join(","))
            .push("format", options.format.as_str())
            .push("lang", options.lang.as_str())
            .push("mode", options.mode.as_str())
            .push("source", SOURCE_TAG);
        query
    }
}

impl std::fmt::Debug for QueryString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in &self.pairs {
            if *k == "key" {
                map.entry(k, &"****");
            } else {
                map.entry(k, v);
            }
        }
        map.finish()
    }
}
