//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\barcode-lookup\config.toml
//! - macOS: ~/Library/Application Support/barcode-lookup/config.toml
//! - Linux: ~/.config/barcode-lookup/config.toml
//!
//! API keys live here (or in environment variables), never in source.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::lookup::sources::upc_itemdb::DEFAULT_URL as UPCITEMDB_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// Per-source settings
    pub sources: SourcesConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// RapidAPI key for the two Google Shopping scrapers
    pub rapidapi_key: Option<String>,

    /// UPCDatabase.org API key
    pub upc_database_key: Option<String>,
}

impl Credentials {
    /// RapidAPI key, if set and non-blank
    pub fn rapidapi_key(&self) -> Option<&str> {
        non_blank(&self.rapidapi_key)
    }

    /// UPCDatabase.org key, if set and non-blank
    pub fn upc_database_key(&self) -> Option<&str> {
        non_blank(&self.upc_database_key)
    }

    /// Override keys with values given on the command line / environment.
    pub fn apply_overrides(&mut self, rapidapi_key: Option<&str>, upc_database_key: Option<&str>) {
        if let Some(key) = rapidapi_key {
            self.rapidapi_key = Some(key.to_string());
        }
        if let Some(key) = upc_database_key {
            self.upc_database_key = Some(key.to_string());
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Per-source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// UPC ItemDB lookup endpoint (point at a proxy to keep traffic server-side)
    pub upcitemdb_url: String,

    /// Country for marketplace searches
    pub shopping_country: String,

    /// Language for marketplace searches
    pub shopping_language: String,

    /// Currency symbol prefixed to marketplace prices
    pub shopping_currency: String,

    /// Maximum characters of a book description
    pub description_limit: usize,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            upcitemdb_url: UPCITEMDB_URL.to_string(),
            shopping_country: "br".to_string(),
            shopping_language: "pt-br".to_string(),
            shopping_currency: "R$".to_string(),
            description_limit: 200,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("barcode-lookup"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
