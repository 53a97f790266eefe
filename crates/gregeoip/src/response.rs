use gregeoip_types::Format;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of a successful call. Only `JSON` responses are decoded.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoIpResponse {
    Json(Value),
    Text(String),
}

impl GeoIpResponse {
    pub(crate) fn decode(format: Format, body: String) -> Result<Self, serde_json::Error> {
        match format {
            Format::Json => serde_json::from_str(&body).map(GeoIpResponse::Json),
            Format::Xml | Format::Csv | Format::Newline => Ok(GeoIpResponse::Text(body)),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, GeoIpResponse::Json(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            GeoIpResponse::Json(v) => Some(v),
            GeoIpResponse::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            GeoIpResponse::Json(_) => None,
            GeoIpResponse::Text(t) => Some(t),
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            GeoIpResponse::Json(v) => Some(v),
            GeoIpResponse::Text(_) => None,
        }
    }

    /// Maps the payload onto a caller-defined type. Text bodies are parsed as JSON.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self {
            GeoIpResponse::Json(v) => serde_json::from_value(v.clone()),
            GeoIpResponse::Text(t) => serde_json::from_str(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_json_is_decoded() {
        let resp = GeoIpResponse::decode(Format::Json, r#"{"status":"ok"}"#.into()).unwrap();
        assert_eq!(resp.as_json(), Some(&json!({"status": "ok"})));
        assert!(resp.as_text().is_none());
    }

    #[test]
    fn test_other_formats_pass_through() {
        let body = "<geoip><status>ok</status></geoip>";
        let resp = GeoIpResponse::decode(Format::Xml, body.into()).unwrap();
        assert_eq!(resp.as_text(), Some(body));

        let resp = GeoIpResponse::decode(Format::Csv, "a,b\n1,2".into()).unwrap();
        assert!(!resp.is_json());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(GeoIpResponse::decode(Format::Json, "not json".into()).is_err());
    }

    #[test]
    fn test_typed_deserialize() {
        #[derive(Deserialize)]
        struct Status {
            status: String,
        }

        let resp = GeoIpResponse::Json(json!({"status": "ok", "extra": 1}));
        let status: Status = resp.deserialize().unwrap();
        assert_eq!(status.status, "ok");
    }
}
