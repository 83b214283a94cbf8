use bevy::log::{info, warn};
use rand_chacha::ChaCha8Rng;

use crate::components::{
    AircraftSpec, AircraftState, CameraPose, CameraTransform, ControlEvent, ControlInputs,
    GroundElevation, HudReadout,
};
use crate::resources::config::SimulationConfig;
use crate::systems::flight::{FlightModel, TimeStepper};
use crate::utils::{errors::SimError, RandomSource};

/// Owns one flight: configuration, aircraft state, model and time stepping.
pub struct Simulation<R: RandomSource = ChaCha8Rng> {
    config: SimulationConfig,
    state: AircraftState,
    model: FlightModel<R>,
    stepper: TimeStepper,
    elapsed: f64,
}

impl Simulation<ChaCha8Rng> {
    /// Validate `config` and park the aircraft at its airfield.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let model = FlightModel::seeded(
            config.aircraft.clone(),
            config.airfield.clone(),
            config.seed,
        );
        Ok(Self::with_model(config, model))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Simulation with a caller-supplied jitter source.
    pub fn seeded(config: SimulationConfig, rng: R) -> Result<Self, SimError> {
        config.validate()?;
        let model = FlightModel::new(config.aircraft.clone(), config.airfield.clone(), rng);
        Ok(Self::with_model(config, model))
    }

    fn with_model(config: SimulationConfig, model: FlightModel<R>) -> Self {
        info!(
            "{} parked at {} ({:.1} m MSL), heading {:.0}",
            config.aircraft.name,
            config.airfield.name,
            config.airfield.elevation,
            config.airfield.start_heading
        );
        Self {
            state: AircraftState::parked(&config.airfield),
            stepper: TimeStepper::new(config.timestep),
            config,
            model,
            elapsed: 0.0,
        }
    }

    /// Apply this frame's controls, then run the planned ticks. Returns the
    /// number of ticks run.
    pub fn advance(&mut self, frame_dt: f64, controls: &ControlInputs) -> Result<u32, SimError> {
        let plan = self.stepper.plan(frame_dt)?;
        self.state.apply_controls(controls);
        for _ in 0..plan.ticks {
            self.model.step(&mut self.state, plan.dt)?;
        }
        self.elapsed += plan.dt * plan.ticks as f64;
        Ok(plan.ticks)
    }

    pub fn handle_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Reset => self.reset(),
            other => {
                self.state.apply_event(other);
                info!(
                    "{:?}: gear {}, flaps {}°",
                    other,
                    if self.state.gear_down { "down" } else { "up" },
                    self.state.flaps.degrees()
                );
            }
        }
    }

    /// Replace the aircraft with a freshly parked one.
    pub fn reset(&mut self) {
        info!("Reset to {}", self.config.airfield.name);
        self.state = AircraftState::parked(&self.config.airfield);
        self.model.clear_regime();
        self.stepper.reset();
        self.elapsed = 0.0;
    }

    /// Check the post-tick invariants, logging the violation if any.
    pub fn check(&self) -> Result<(), SimError> {
        let ground = self
            .config
            .airfield
            .elevation_at(self.state.position.x, self.state.position.z);
        self.state
            .check_invariants(&self.config.aircraft, ground)
            .inspect_err(|e| warn!("{}", e))
    }

    pub fn camera_pose(&self) -> CameraPose {
        CameraTransform::from_state(&self.state, &self.config.camera.eye_offset)
    }

    pub fn hud(&self) -> HudReadout {
        HudReadout::from_state(&self.state, &self.config.aircraft)
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn spec(&self) -> &AircraftSpec {
        &self.config.aircraft
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulated seconds since start or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
