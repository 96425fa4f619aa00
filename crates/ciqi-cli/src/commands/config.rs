//! Config command handlers

use anyhow::{bail, Context, Result};

use ciqi_core::{Config, Language};

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "language": config.language.to_string(),
                    "timeline_file": config.timeline_path(),
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir: {}", config.data_dir.display());
            println!("  language: {}", config.language);
            println!();
            println!("Config file:   {}", Config::config_file_path().display());
            println!("Timeline file: {}", config.timeline_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: &str, value: &str, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key {
        "data_dir" => config.data_dir = value.into(),
        "language" => config.language = value.parse::<Language>()?,
        _ => bail!("Unknown config key '{}'. Valid keys: data_dir, language", key),
    }

    config.save().context("Failed to save configuration")?;
    output.success(&format!("Set {} = {}", key, value));
    Ok(())
}
