pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{AircraftSpec, AircraftState, Airfield, CameraPose, CameraTransform, ControlInputs};
pub use plugins::{CockpitScenePlugin, FlightSimPlugin};
pub use resources::{Simulation, SimulationConfig};
pub use systems::flight::FlightModel;
pub use utils::errors::SimError;
