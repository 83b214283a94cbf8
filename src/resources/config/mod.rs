pub mod camera;
pub mod input;
pub mod simulation;

pub use camera::CameraConfig;
pub use input::InputConfig;
pub use simulation::SimulationConfig;
