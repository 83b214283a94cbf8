mod dynamics;
mod step;
mod stepper;

pub use dynamics::{validate_timestep, FlightModel, IntegrationStep};
pub use step::flight_step_system;
pub use stepper::{StepPlan, TimeStepper, TimestepMode};
