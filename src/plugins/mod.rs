mod flight;
mod scene;

pub use flight::{FlightSet, FlightSimPlugin};
pub use scene::{CockpitScenePlugin, SceneSet};
