use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

use crate::components::aircraft::config::AircraftSpec;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Read and deserialize a YAML file.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_yaml::from_str(&content)?)
}

impl AircraftSpec {
    /// Load and validate a performance table. Missing keys fall back to the
    /// Cessna 172 values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let spec: Self = load_yaml(path)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let spec: Self = serde_yaml::from_str(yaml)?;
        spec.validate()?;
        Ok(spec)
    }
}
