pub mod aircraft;
pub mod camera;
pub mod hud;

pub use aircraft::{
    AircraftSpec, AircraftState, Airfield, ConfigError, ControlEvent, ControlInputs, EngineSpec,
    FlapSetting, GroundElevation, ThrottleCommand,
};
pub use camera::{CameraPose, CameraTransform, CockpitCamera};
pub use hud::{HudReadout, HudText, StallBanner};
