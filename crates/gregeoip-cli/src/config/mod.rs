mod logging;
mod settings;
mod types;

pub use logging::LoggingConfig;
pub use settings::CliConfig;

#[cfg(test)]
mod tests {
    use super::*;
    use super::types::LogLevel;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config_validation() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.api_key.is_none());
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config.apply_overrides(env(&[
            ("GREGEOIP_API_KEY", "from-env"),
            ("GREGEOIP_BASE_URL", "http://localhost:9000"),
            ("GREGEOIP_TIMEOUT_SECS", "7"),
            ("GREGEOIP_LOG_LEVEL", "DEBUG"),
            ("GREGEOIP_LOG_JSON", "1"),
        ]));

        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.client.base_url, "http://localhost:9000");
        assert_eq!(config.client.timeout_secs, 7);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.json);
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let mut config = CliConfig::default();
        config.apply_overrides(env(&[
            ("GREGEOIP_TIMEOUT_SECS", "soon"),
            ("GREGEOIP_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.client, gregeoip::ClientConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CliConfig::default();
        config.client.timeout_secs = 12;
        config.logging.level = LogLevel::Info;
        config.save(&path).unwrap();

        let loaded: CliConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.client.timeout_secs, 12);
        assert_eq!(loaded.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\nbase_url = \"gregeoip.com\"\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn test_build_client_requires_key() {
        let config = CliConfig::default();
        assert!(config.build_client().is_err());

        let config = CliConfig {
            api_key: Some("abc".into()),
            ..Default::default()
        };
        assert!(config.build_client().is_ok());
    }

    #[test]
    fn test_redacted_config_hides_key() {
        let config = CliConfig {
            api_key: Some("do-not-print".into()),
            ..Default::default()
        };
        let shown = config.redacted().to_string();
        assert!(!shown.contains("do-not-print"));
        assert!(shown.contains("API key: ****"));
    }
}
