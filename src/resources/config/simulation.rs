use bevy::log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{camera::CameraConfig, input::InputConfig};
use crate::components::aircraft::{load_yaml, AircraftSpec, Airfield, ConfigError};
use crate::systems::flight::TimestepMode;

/// Everything needed to start a flight. Every section is optional in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub aircraft: AircraftSpec,
    pub airfield: Airfield,
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub timestep: TimestepMode,
    /// Stall jitter seed; drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Self = load_yaml(path)?;
        config.validate()?;
        info!(
            "Loaded {} at {} from {}",
            config.aircraft.name,
            config.airfield.name,
            path.display()
        );
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.aircraft.validate()?;
        self.airfield.validate()?;
        self.camera
            .validate()
            .and_then(|_| self.input.validate())
            .and_then(|_| self.timestep.validate())
            .map_err(ConfigError::ValidationError)
    }
}
