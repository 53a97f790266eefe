mod commands;
mod config_cmd;
mod query;
mod utils;

pub use commands::{Cli, Commands};
pub use config_cmd::handle_config;
pub use query::{run_country, run_geoip, run_lookup};
pub use utils::init_logging;
