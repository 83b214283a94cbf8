use std::io;
use thiserror::Error;

use crate::components::aircraft::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid timestep: {0} (must be finite and positive)")]
    InvalidTimestep(f64),

    #[error("Invalid control input: {0}")]
    InvalidControl(String),

    #[error("State error: {0}")]
    StateError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
