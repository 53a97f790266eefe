use super::commands::ConfigAction;
use crate::config::CliConfig;
use anyhow::{bail, Result};
use std::path::Path;

pub fn handle_config(config_path: &Path, config: &CliConfig, action: Option<ConfigAction>) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            if !config_path.exists() {
                println!("No configuration file found at {:?}, showing defaults", config_path);
                println!("Run 'gregeoip config init' to create one\n");
            }
            print!("{}", config.redacted());
        }
        Some(ConfigAction::Init { force }) => {
            if config_path.exists() && !force {
                bail!(
                    "Configuration already exists at {:?} (use --force to overwrite)",
                    config_path
                );
            }
            CliConfig::default().save(config_path)?;
            println!("Configuration written to {:?}", config_path);
        }
        Some(ConfigAction::Path) => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = CliConfig::default();

        handle_config(&path, &config, Some(ConfigAction::Init { force: false })).unwrap();
        assert!(path.exists());

        assert!(handle_config(&path, &config, Some(ConfigAction::Init { force: false })).is_err());
        assert!(handle_config(&path, &config, Some(ConfigAction::Init { force: true })).is_ok());
    }
}
