mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{handle_config, init_logging, run_country, run_geoip, run_lookup, Cli, Commands};
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(CliConfig::default_path);
    let mut config = CliConfig::load(&config_path)?;
    if let Some(key) = cli.api_key.clone() {
        config.api_key = Some(key);
    }

    init_logging(&cli, &config.logging)?;

    match cli.command {
        Commands::Geoip { request } => {
            run_geoip(&config, request).await?;
        }
        Commands::Lookup { ip, request } => {
            run_lookup(&config, ip, request).await?;
        }
        Commands::Country { country_code, request } => {
            run_country(&config, country_code, request).await?;
        }
        Commands::Config { action } => {
            handle_config(&config_path, &config, action)?;
        }
    }

    Ok(())
}
