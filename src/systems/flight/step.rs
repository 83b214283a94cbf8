use bevy::prelude::*;

use crate::components::ControlEvent;
use crate::resources::{FlightSimulation, PilotControls, SimPaused};

/// Apply queued cockpit events, then advance the flight by the frame time.
/// While paused the controls are still written but no time passes.
pub fn flight_step_system(
    time: Res<Time>,
    paused: Res<SimPaused>,
    mut events: EventReader<ControlEvent>,
    mut simulation: ResMut<FlightSimulation>,
    mut controls: ResMut<PilotControls>,
) {
    for event in events.read() {
        if *event == ControlEvent::Reset {
            controls.clear();
        }
        simulation.handle_event(*event);
    }

    let frame_dt = if paused.0 { 0.0 } else { time.delta_secs_f64() };
    if let Err(e) = simulation.advance(frame_dt, &controls) {
        warn!("Frame skipped: {}", e);
    }
    controls.end_frame();
}
