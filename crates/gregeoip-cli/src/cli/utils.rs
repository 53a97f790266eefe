use super::commands::Cli;
use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use gregeoip::GeoIpResponse;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `RUST_LOG` wins, then `-q` / `-v`, then the config file level.
/// Logs go to stderr so stdout carries only the response.
pub fn init_logging(cli: &Cli, config: &LoggingConfig) -> Result<()> {
    let level = if cli.quiet {
        "error".to_string()
    } else {
        match cli.verbose {
            0 => config.level.to_string(),
            1 => "info,gregeoip=debug".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter);

    let log_file = cli.log_file.as_ref().or(config.file.as_ref());

    if let Some(log_file) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {:?}", log_file))?;
        let file_layer = fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false);
        if config.json {
            subscriber.with(file_layer.json()).init();
        } else {
            subscriber.with(file_layer).init();
        }
    } else if config.json {
        let stderr_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        subscriber.with(stderr_layer).init();
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(cli.verbose >= 2);
        subscriber.with(stderr_layer).init();
    }

    Ok(())
}

pub fn render_response(response: &GeoIpResponse) -> Result<String> {
    match response {
        GeoIpResponse::Json(value) => {
            serde_json::to_string_pretty(value).context("Failed to render JSON response")
        }
        GeoIpResponse::Text(text) => Ok(text.clone()),
    }
}
