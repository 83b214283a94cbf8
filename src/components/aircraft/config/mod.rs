mod aircraft;
mod loader;
mod start;

pub use aircraft::{AircraftSpec, EngineSpec};
pub use loader::{load_yaml, ConfigError};
pub use start::{Airfield, GroundElevation};
