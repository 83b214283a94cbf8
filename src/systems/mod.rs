mod camera;
mod controller;
pub mod flight;
mod hud;

pub use camera::{cockpit_camera_system, pose_to_transform};
pub use controller::{
    apply_keys, apply_mouse, keyboard_controls_system, mouse_yoke_system, HeldKeys,
};
pub use flight::{flight_step_system, FlightModel, IntegrationStep, TimeStepper, TimestepMode};
pub use hud::{hud_text_system, stall_banner_system};
