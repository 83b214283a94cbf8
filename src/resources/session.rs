use bevy::prelude::*;

use crate::components::{ControlInputs, ThrottleCommand};
use crate::resources::Simulation;

/// The running flight, owned by the bevy world.
#[derive(Resource, Deref, DerefMut)]
pub struct FlightSimulation(pub Simulation);

/// Pilot inputs collected by the input systems. Axes persist between
/// frames; the throttle command only lives for one frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct PilotControls(pub ControlInputs);

impl PilotControls {
    pub fn end_frame(&mut self) {
        self.0.throttle = ThrottleCommand::Hold;
    }

    pub fn clear(&mut self) {
        self.0 = ControlInputs::default();
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimPaused(pub bool);

impl SimPaused {
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}
