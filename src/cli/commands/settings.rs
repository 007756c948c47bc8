//! Source listing and config file commands.

use crate::config::{self, Config};
use crate::lookup::LookupService;

/// List the sources a lookup would consult, in order
pub fn cmd_sources(config: &Config) -> anyhow::Result<()> {
    let service = LookupService::from_config(config)?;

    println!("Sources, in the order they are consulted:");
    println!("(book catalogues are only consulted for ISBN codes)");
    for (i, name) in service.source_names().iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    let missing: Vec<&str> = [
        config
            .credentials
            .rapidapi_key()
            .is_none()
            .then_some("Google Shopping sources need --rapidapi-key or RAPIDAPI_KEY"),
        config
            .credentials
            .upc_database_key()
            .is_none()
            .then_some("UPC Database needs --upc-database-key or UPC_DATABASE_KEY"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        println!();
        for note in missing {
            println!("  Disabled: {}", note);
        }
    }
    Ok(())
}

/// Print the config file location
pub fn cmd_config_path() -> anyhow::Result<()> {
    let path = config::config_path().ok_or(config::ConfigError::NoConfigDir)?;
    println!("{}", path.display());
    Ok(())
}

/// Write a default config file
pub fn cmd_config_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path().ok_or(config::ConfigError::NoConfigDir)?;
    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    let path = config::save(&Config::default())?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
