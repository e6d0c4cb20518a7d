//! Config command handler

use super::confirm;
use crate::args::ConfigSubcommand;
use anyhow::{Context, Result};
use study_progress::config::{Config, ConfigError};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> Result<()> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) -> Result<()> {
    if let Some(k) = key {
        let value = config.get(&k).ok_or(ConfigError::UnknownKey(k))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
    Ok(())
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    config.save().context("failed to save config")?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<()> {
    config.unset(key, defaults)?;
    config.save().context("failed to save config")?;
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
pub fn handle_config_reset() -> Result<()> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if confirm("Are you sure you want to reset config to defaults?") {
        Config::reset().context("failed to remove config file")?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
