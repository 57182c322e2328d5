use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use randomizer_core::{
    ArrayConstraints, DecimalConstraints, IntegerConstraints, StringConstraints, UuidConstraints,
    WordConstraints,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Stored constraints for every value kind, read from a TOML document.
///
/// Missing tables and keys fall back to the stock defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RandomizerSettings {
    pub integer: IntegerConstraints,
    pub decimal: DecimalConstraints,
    pub string: StringConstraints,
    pub word: WordConstraints,
    pub uuid: UuidConstraints,
    pub array: ArrayConstraints,
}

impl RandomizerSettings {
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }
}

/// Loads settings from `path`, or the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> Result<RandomizerSettings, SettingsError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let settings = RandomizerSettings::from_toml(&content)?;
            tracing::debug!(event = "settings_loaded", path = %path.display());
            Ok(settings)
        }
        None => Ok(RandomizerSettings::default()),
    }
}
