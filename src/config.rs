// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_locale() -> String {
    // The substitution table covers this locale plus plain English.
    "schinese".to_string()
}

fn default_max_pages() -> u32 {
    20
}

fn default_page_delay_secs() -> u64 {
    3
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// SteamID64 or vanity profile name. May stay empty in the file when
    /// the profile is always passed on the command line.
    #[serde(default)]
    pub profile: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Upper bound on wishlist pages fetched per run.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    #[serde(default)]
    pub include_dlc: bool,
    /// Pause between wishlist page requests, in seconds.
    #[serde(default = "default_page_delay_secs")]
    pub page_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: String::new(),
            // Match the serde defaults
            locale: "schinese".to_string(),
            max_pages: 20,
            include_dlc: false,
            page_delay_secs: 3,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        // Explicitly detect missing file so callers can fall back to
        // defaults plus command-line arguments.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Detect whether an error from `load` means the file was simply absent
    /// (not fatal), as opposed to unreadable or malformed (fatal).
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }
        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }
}
