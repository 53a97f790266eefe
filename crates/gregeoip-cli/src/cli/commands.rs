use clap::{Args, Parser, Subcommand};
use gregeoip::RequestOptions;
use std::path::PathBuf;

const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "gregeoip")]
#[command(version = BUILD_VERSION)]
#[command(about = "GRE GeoIP - Look up IP geolocation and country data")]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "Documentation: https://geoip-docs.gredev.io")]
pub struct Cli {
    #[arg(short, long, global = true, value_name = "FILE", help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_name = "KEY", help = "API key (overrides config and GREGEOIP_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[arg(long, global = true, value_name = "FILE", help = "Write logs to file")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RequestArgs {
    #[arg(long, value_delimiter = ',', value_name = "MODULES", help = "Comma-separated feature modules")]
    pub params: Vec<String>,

    #[arg(long, value_name = "FORMAT", help = "JSON, XML, CSV or Newline [default: JSON]")]
    pub format: Option<String>,

    #[arg(long, value_name = "LANG", help = "EN, AR, DE, FR, ES, JA, ZH or RU [default: EN]")]
    pub lang: Option<String>,

    #[arg(long, value_name = "MODE", help = "live or test [default: live]")]
    pub mode: Option<String>,
}

impl From<RequestArgs> for RequestOptions {
    fn from(args: RequestArgs) -> Self {
        RequestOptions {
            params: args.params,
            format: args.format,
            lang: args.lang,
            mode: args.mode,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Geolocate the caller's own address")]
    Geoip {
        #[command(flatten)]
        request: RequestArgs,
    },

    #[command(about = "Geolocate an IP address")]
    Lookup {
        #[arg(value_name = "IP")]
        ip: String,
        #[command(flatten)]
        request: RequestArgs,
    },

    #[command(about = "Show country data for an ISO 3166-1 alpha-2 code")]
    Country {
        #[arg(value_name = "CODE")]
        country_code: String,
        #[command(flatten)]
        request: RequestArgs,
    },

    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Show effective configuration (API key redacted)")]
    Show,
    #[command(about = "Write a default config file")]
    Init {
        #[arg(short, long, help = "Overwrite existing configuration")]
        force: bool,
    },
    #[command(about = "Print the config file path")]
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from([
            "gregeoip", "--api-key", "abc", "lookup", "8.8.8.8",
            "--params", "location,security", "--lang", "de",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        match cli.command {
            Commands::Lookup { ip, request } => {
                assert_eq!(ip, "8.8.8.8");
                assert_eq!(request.params, vec!["location", "security"]);
                let options: RequestOptions = request.into();
                assert_eq!(options.lang.as_deref(), Some("de"));
                assert!(options.format.is_none());
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_parse_country_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gregeoip", "country", "us", "-vv", "--format", "XML"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Country { country_code, request } => {
                assert_eq!(country_code, "us");
                assert_eq!(request.format.as_deref(), Some("XML"));
            }
            _ => panic!("expected country"),
        }
    }

    #[test]
    fn test_lookup_requires_ip() {
        assert!(Cli::try_parse_from(["gregeoip", "lookup"]).is_err());
    }
}
