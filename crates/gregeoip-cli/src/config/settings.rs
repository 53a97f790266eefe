use anyhow::{Context, Result};
use gregeoip::{ClientConfig, GeoIpClient};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::logging::LoggingConfig;
use super::types::LogLevel;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub api_key: Option<String>,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gregeoip")
            .join("config.toml")
    }

    /// Reads `path` if it exists, then applies `GREGEOIP_*` environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {:?}", path))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config {:?}", path))?
        } else {
            debug!("Config file {:?} not found, using defaults", path);
            Self::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).context("Failed to create config dir")?;
        }

        std::fs::write(path.as_ref(), contents).context("Failed to write config")?;
        Ok(())
    }

    pub(crate) fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("GREGEOIP_API_KEY") {
            self.api_key = Some(key);
        }

        if let Some(url) = var("GREGEOIP_BASE_URL") {
            self.client.base_url = url;
        }

        if let Some(secs) = var("GREGEOIP_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.client.timeout_secs = secs;
        }

        if let Some(level) = var("GREGEOIP_LOG_LEVEL").and_then(|l| LogLevel::parse(&l)) {
            self.logging.level = level;
        }

        if var("GREGEOIP_LOG_JSON").is_some() {
            self.logging.json = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.client.validate()?;
        Ok(())
    }

    pub fn build_client(&self) -> Result<GeoIpClient> {
        let key = self.api_key.clone().unwrap_or_default();
        let client = GeoIpClient::builder(key)
            .config(self.client.clone())
            .build()
            .context("Set an API key with --api-key, GREGEOIP_API_KEY or `api_key` in the config file")?;
        Ok(client)
    }

    pub fn redacted(&self) -> RedactedConfig {
        RedactedConfig {
            api_key_set: self.api_key.as_deref().is_some_and(|k| !k.is_empty()),
            base_url: self.client.base_url.clone(),
            timeout_secs: self.client.timeout_secs,
            log_level: self.logging.level,
            log_json: self.logging.json,
            log_file: self.logging.file.clone(),
        }
    }
}

pub struct RedactedConfig {
    pub api_key_set: bool,
    pub base_url: String,
    pub timeout_secs: u64,
    pub log_level: LogLevel,
    pub log_json: bool,
    pub log_file: Option<PathBuf>,
}

impl std::fmt::Display for RedactedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "GRE GeoIP Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f, "API key: {}", if self.api_key_set { "****" } else { "(not set)" })?;
        writeln!(f, "Base URL: {}", self.base_url)?;
        writeln!(f, "Timeout: {}s", self.timeout_secs)?;
        writeln!(f, "Log level: {}", self.log_level)?;
        writeln!(f, "Log format: {}", if self.log_json { "json" } else { "text" })?;
        match &self.log_file {
            Some(path) => writeln!(f, "Log file: {:?}", path)?,
            None => writeln!(f, "Log file: (stderr)")?,
        }
        Ok(())
    }
}
