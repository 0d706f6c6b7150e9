use anyhow::{Context, Result};
use sheetcalc_core::Config;
use std::env;
use std::path::Path;
use tracing::info;

/// Resolve configuration from an explicit path or the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    if explicit.is_none() {
        if let Some(path) = Config::find_config_file(&cwd) {
            info!("Using configuration from {}", path.display());
        }
    }

    Config::load(explicit, &cwd).context("Failed to load configuration")
}

pub fn config_command(explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{json}");
    Ok(())
}
