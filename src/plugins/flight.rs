use bevy::prelude::*;

use crate::components::ControlEvent;
use crate::resources::{FlightSimulation, PilotControls, SimPaused, Simulation, SimulationConfig};
use crate::systems::{
    cockpit_camera_system, flight_step_system, hud_text_system, keyboard_controls_system,
    mouse_yoke_system, stall_banner_system,
};
use crate::utils::errors::SimError;

/// Per-frame stages of the flight loop, run in this order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Step,
    Present,
}

/// Pilot input, flight model and cockpit presentation on the variable
/// frame clock.
pub struct FlightSimPlugin {
    config: SimulationConfig,
}

impl FlightSimPlugin {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Plugin for FlightSimPlugin {
    fn build(&self, app: &mut App) {
        let simulation = match Simulation::new(self.config.clone()) {
            Ok(simulation) => simulation,
            Err(e) => {
                error!("Flight simulation not started: {}", e);
                return;
            }
        };

        app.insert_resource(FlightSimulation(simulation))
            .init_resource::<PilotControls>()
            .init_resource::<SimPaused>()
            .add_event::<ControlEvent>()
            .configure_sets(
                Update,
                (FlightSet::Input, FlightSet::Step, FlightSet::Present).chain(),
            )
            .add_systems(
                Update,
                (
                    (mouse_yoke_system, keyboard_controls_system)
                        .chain()
                        .in_set(FlightSet::Input),
                    flight_step_system.in_set(FlightSet::Step),
                    (cockpit_camera_system, hud_text_system, stall_banner_system)
                        .in_set(FlightSet::Present),
                ),
            );
    }
}
