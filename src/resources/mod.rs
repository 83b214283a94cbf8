pub mod config;
mod session;
mod simulation;

pub use config::{CameraConfig, InputConfig, SimulationConfig};
pub use session::{FlightSimulation, PilotControls, SimPaused};
pub use simulation::Simulation;
