//! Settings of a calculator session.

use crate::Result;
use serde::Deserialize;
use std::{fs, path::Path};

/// The calculator configuration.
///
/// Every key is optional in the config file:
/// ```toml
/// color = true
/// clear_screen = false
/// show_features = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Print ANSI colors.
    pub color: bool,
    /// Clear the screen between calculations.
    pub clear_screen: bool,
    /// Print the feature list when the session starts.
    pub show_features: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            show_features: true,
        }
    }
}

impl Config {
    /// Load the config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_data = fs::read_to_string(path)?;
        let config = Self::from_toml(&config_data)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse the config from TOML text.
    pub fn from_toml(config_data: &str) -> Result<Self> {
        Ok(toml::from_str(config_data)?)
    }
}
