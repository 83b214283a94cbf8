use crate::components::{ControlInputs, ThrottleCommand};
use crate::resources::InputConfig;

/// Flight keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
}

/// Mouse yoke: the frame's pointer motion sets elevator and aileron
/// directly. Screen y grows downward, so pulling the mouse back pitches up.
pub fn apply_mouse(controls: &mut ControlInputs, dx: f64, dy: f64, input: &InputConfig) {
    let gain = input.mouse_sensitivity / 10.0;
    controls.elevator = (-dy * gain).clamp(-1.0, 1.0);
    controls.aileron = (dx * gain).clamp(-1.0, 1.0);
}

/// Keyboard flight controls, applied after the mouse.
///
/// A held arrow key forces its axis to full deflection. A released axis is
/// only centred when it is inside the deadband, so a small mouse deflection
/// is zeroed while a larger one is kept.
pub fn apply_keys(controls: &mut ControlInputs, keys: &HeldKeys, input: &InputConfig) {
    controls.elevator = key_axis(keys.pitch_up, keys.pitch_down, controls.elevator, input.deadband);
    controls.aileron = key_axis(keys.roll_right, keys.roll_left, controls.aileron, input.deadband);

    controls.rudder = if keys.yaw_left {
        -1.0
    } else if keys.yaw_right {
        1.0
    } else {
        0.0
    };

    let step = match (keys.throttle_up, keys.throttle_down) {
        (true, false) => input.throttle_step,
        (false, true) => -input.throttle_step,
        _ => 0.0,
    };
    controls.throttle = if step == 0.0 {
        ThrottleCommand::Hold
    } else {
        ThrottleCommand::Adjust(step)
    };
}

fn key_axis(positive: bool, negative: bool, current: f64, deadband: f64) -> f64 {
    if positive {
        1.0
    } else if negative {
        -1.0
    } else if current.abs() < deadband {
        0.0
    } else {
        current
    }
}
