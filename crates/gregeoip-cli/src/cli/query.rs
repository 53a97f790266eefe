use super::commands::RequestArgs;
use super::utils::render_response;
use crate::config::CliConfig;
use anyhow::Result;
use gregeoip::{CountryOptions, GeoIpOptions, LookupOptions};
use tracing::info;

pub async fn run_geoip(config: &CliConfig, request: RequestArgs) -> Result<()> {
    let client = config.build_client()?;
    let options: GeoIpOptions = request.into();

    let response = client.geoip(&options).await?;
    info!("GeoIP lookup complete");
    println!("{}", render_response(&response)?);
    Ok(())
}

pub async fn run_lookup(config: &CliConfig, ip: String, request: RequestArgs) -> Result<()> {
    let client = config.build_client()?;
    let options = LookupOptions::new(ip).with_options(request.into());

    let response = client.lookup(&options).await?;
    info!("IP lookup complete");
    println!("{}", render_response(&response)?);
    Ok(())
}

pub async fn run_country(config: &CliConfig, country_code: String, request: RequestArgs) -> Result<()> {
    let client = config.build_client()?;
    let options = CountryOptions::new(country_code).with_options(request.into());

    let response = client.country(&options).await?;
    info!("Country lookup complete");
    println!("{}", render_response(&response)?);
    Ok(())
}
