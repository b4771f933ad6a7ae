//! Service configuration loading from config.toml
//!
//! The config file defines the fixed set of location categories used to
//! seed the database, plus service settings such as the refresh interval
//! for the receptionist view. Categories defined here are upserted on
//! startup; categories removed from the file are soft-disabled, not
//! deleted, so historical transactions keep their labels.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default interval between transaction list re-fetches, in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Seconds between automatic transaction list refreshes
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// List of valid location categories
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single location category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Category name (e.g. `"restaurant"`, `"spa"`)
    pub name: String,
    /// Whether new charges may use this category
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Loads service configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is
/// invalid, or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads service configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
