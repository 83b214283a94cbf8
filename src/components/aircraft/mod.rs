pub mod config;
mod controls;
mod state;

pub use config::{
    load_yaml, AircraftSpec, Airfield, ConfigError, EngineSpec, GroundElevation,
};
pub use controls::{ControlEvent, ControlInputs, FlapSetting, ThrottleCommand};
pub use state::AircraftState;
