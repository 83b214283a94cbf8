use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use super::mapping::{apply_keys, apply_mouse, HeldKeys};
use crate::components::ControlEvent;
use crate::resources::{FlightSimulation, PilotControls, SimPaused};

/// Mouse yoke. Motion is drained every frame but ignored while paused.
pub fn mouse_yoke_system(
    mut motion: EventReader<MouseMotion>,
    paused: Res<SimPaused>,
    simulation: Res<FlightSimulation>,
    mut controls: ResMut<PilotControls>,
) {
    let mut moved = false;
    let mut delta = Vec2::ZERO;
    for event in motion.read() {
        delta += event.delta;
        moved = true;
    }
    if moved && !paused.0 {
        apply_mouse(
            &mut controls,
            delta.x as f64,
            delta.y as f64,
            &simulation.config().input,
        );
    }
}

/// Held flight keys plus the one-shot cockpit keys.
pub fn keyboard_controls_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    simulation: Res<FlightSimulation>,
    mut controls: ResMut<PilotControls>,
    mut paused: ResMut<SimPaused>,
    mut events: EventWriter<ControlEvent>,
    mut exit: EventWriter<AppExit>,
) {
    let held = HeldKeys {
        pitch_up: keyboard.pressed(KeyCode::ArrowUp),
        pitch_down: keyboard.pressed(KeyCode::ArrowDown),
        roll_left: keyboard.pressed(KeyCode::ArrowLeft),
        roll_right: keyboard.pressed(KeyCode::ArrowRight),
        yaw_left: keyboard.pressed(KeyCode::KeyZ),
        yaw_right: keyboard.pressed(KeyCode::KeyX),
        throttle_up: keyboard.any_pressed([KeyCode::Equal, KeyCode::NumpadAdd]),
        throttle_down: keyboard.any_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]),
    };
    apply_keys(&mut controls, &held, &simulation.config().input);

    if keyboard.just_pressed(KeyCode::KeyP) {
        paused.toggle();
        info!("{}", if paused.0 { "Paused" } else { "Resumed" });
    }
    if keyboard.just_pressed(KeyCode::KeyG) {
        events.send(ControlEvent::ToggleGear);
    }
    if keyboard.just_pressed(KeyCode::KeyF) {
        events.send(ControlEvent::CycleFlaps);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        events.send(ControlEvent::Reset);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
