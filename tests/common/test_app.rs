use bevy::input::keyboard::{Key, KeyboardInput, NativeKey};
use bevy::input::mouse::MouseMotion;
use bevy::input::{ButtonState, InputPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flightdeck::{
    components::ControlEvent,
    plugins::FlightSimPlugin,
    resources::{FlightSimulation, PilotControls, SimPaused, Simulation, SimulationConfig},
};
use std::time::Duration;

/// Builder for a windowless app running the flight plugin on a manual clock.
pub struct TestAppBuilder {
    config: SimulationConfig,
    frame_dt: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig {
                seed: Some(7),
                ..Default::default()
            },
            frame_dt: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_frame_dt(mut self, frame_dt: f64) -> Self {
        self.frame_dt = frame_dt;
        self
    }

    pub fn build(self) -> TestApp {
        let plugin = match FlightSimPlugin::new(self.config) {
            Ok(plugin) => plugin,
            Err(e) => panic!("invalid test config: {e}"),
        };

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, InputPlugin))
            .add_plugins(plugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.frame_dt,
            )));

        // the first update only starts the clock
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.app.world().resource::<FlightSimulation>().0
    }

    pub fn controls(&self) -> PilotControls {
        *self.app.world().resource::<PilotControls>()
    }

    pub fn paused(&self) -> bool {
        self.app.world().resource::<SimPaused>().0
    }

    pub fn send(&mut self, event: ControlEvent) {
        self.app.world_mut().send_event(event);
    }

    /// Keep `key` down across the following frames.
    pub fn hold(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Press and release `key` over two frames, as a keyboard would.
    pub fn tap(&mut self, key: KeyCode) {
        self.key_event(key, ButtonState::Pressed);
        self.run_frames(1);
        self.key_event(key, ButtonState::Released);
        self.run_frames(1);
    }

    pub fn move_mouse(&mut self, dx: f32, dy: f32) {
        self.app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(dx, dy),
        });
    }

    fn key_event(&mut self, key_code: KeyCode, state: ButtonState) {
        self.app.world_mut().send_event(KeyboardInput {
            key_code,
            logical_key: Key::Unidentified(NativeKey::Unidentified),
            state,
            repeat: false,
            window: Entity::PLACEHOLDER,
        });
    }
}
