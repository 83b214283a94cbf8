use bevy::log::{debug, info};
use rand_chacha::ChaCha8Rng;

use crate::components::aircraft::{
    AircraftSpec, AircraftState, Airfield, ControlInputs, GroundElevation,
};
use crate::utils::{
    approach, deg_to_rad, errors::SimError, wrap_degrees, RandomSource, RngManager,
    AIRSPEED_LAG, BANK_TURN_GAIN, GRAVITY, PITCH_RATE_REFERENCE, ROLL_LEVELING_DEADBAND,
    ROLL_LEVELING_FACTOR, RPM_LAG, STALL_JITTER_MAX_BANK, STALL_JITTER_RATE, VERTICAL_SPEED_LAG,
};

/// One stage of a tick. `ORDER` is the sequence `FlightModel::step` runs;
/// later stages read values written by earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStep {
    Position,
    GroundContact,
    AttitudeRates,
    BankCoupling,
    AttitudeLimits,
    Airspeed,
    EngineRpm,
    VerticalSpeed,
    FuelBurn,
    RollLeveling,
    Stall,
}

impl IntegrationStep {
    pub const ORDER: [IntegrationStep; 11] = [
        IntegrationStep::Position,
        IntegrationStep::GroundContact,
        IntegrationStep::AttitudeRates,
        IntegrationStep::BankCoupling,
        IntegrationStep::AttitudeLimits,
        IntegrationStep::Airspeed,
        IntegrationStep::EngineRpm,
        IntegrationStep::VerticalSpeed,
        IntegrationStep::FuelBurn,
        IntegrationStep::RollLeveling,
        IntegrationStep::Stall,
    ];
}

/// Regime flags kept only to log transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Regime {
    on_ground: bool,
    stalled: bool,
    flamed_out: bool,
}

/// Empirical first-order flight model for one aircraft type.
///
/// Owns the performance table, the airfield used as collision floor and
/// the random source for stall jitter.
pub struct FlightModel<R: RandomSource = ChaCha8Rng> {
    spec: AircraftSpec,
    airfield: Airfield,
    rng: R,
    regime: Regime,
}

impl FlightModel<ChaCha8Rng> {
    /// Model with a ChaCha stream derived from `seed`, or from entropy.
    pub fn seeded(spec: AircraftSpec, airfield: Airfield, seed: Option<u64>) -> Self {
        let rng = RngManager::from_optional_seed(seed).get_rng("stall_jitter");
        Self::new(spec, airfield, rng)
    }
}

impl<R: RandomSource> FlightModel<R> {
    pub fn new(spec: AircraftSpec, airfield: Airfield, rng: R) -> Self {
        Self {
            spec,
            airfield,
            rng,
            regime: Regime::default(),
        }
    }

    pub fn spec(&self) -> &AircraftSpec {
        &self.spec
    }

    pub fn airfield(&self) -> &Airfield {
        &self.airfield
    }

    /// Forget logged regimes, used when the aircraft is re-created.
    pub fn clear_regime(&mut self) {
        self.regime = Regime::default();
    }

    /// Write `controls` into the state and advance it by `dt` seconds.
    pub fn integrate(
        &mut self,
        state: &mut AircraftState,
        controls: &ControlInputs,
        dt: f64,
    ) -> Result<(), SimError> {
        validate_timestep(dt)?;
        state.apply_controls(controls);
        self.step(state, dt)
    }

    /// Advance the state by `dt` seconds using the controls already stored
    /// in it. A rejected timestep leaves the state untouched.
    pub fn step(&mut self, state: &mut AircraftState, dt: f64) -> Result<(), SimError> {
        validate_timestep(dt)?;

        for step in IntegrationStep::ORDER {
            self.apply_step(step, state, dt);
        }

        self.log_transitions(state);
        debug!(
            "tick dt={:.4} pos=({:.1}, {:.1}, {:.1}) hdg={:.1} pitch={:.1} roll={:.1} tas={:.2} vs={:.2} rpm={:.0} fuel={:.2}",
            dt,
            state.position.x,
            state.position.y,
            state.position.z,
            state.heading,
            state.pitch,
            state.roll,
            state.airspeed,
            state.vertical_speed,
            state.rpm,
            state.fuel
        );
        Ok(())
    }

    pub fn apply_step(&mut self, step: IntegrationStep, state: &mut AircraftState, dt: f64) {
        match step {
            IntegrationStep::Position => integrate_position(state, dt),
            IntegrationStep::GroundContact => {
                let ground = self
                    .airfield
                    .elevation_at(state.position.x, state.position.z);
                clamp_to_ground(state, ground);
            }
            IntegrationStep::AttitudeRates => {
                state.roll += state.aileron * self.spec.roll_rate * dt;
                state.pitch += state.elevator * self.spec.pitch_rate * dt;
                state.heading += state.rudder * self.spec.yaw_rate * dt;
            }
            IntegrationStep::BankCoupling => {
                state.heading += deg_to_rad(state.roll).sin() * dt * BANK_TURN_GAIN;
            }
            IntegrationStep::AttitudeLimits => {
                state.heading = wrap_degrees(state.heading);
                state.pitch = state
                    .pitch
                    .clamp(-self.spec.pitch_limit, self.spec.pitch_limit);
                state.roll = state.roll.clamp(-self.spec.roll_limit, self.spec.roll_limit);
            }
            IntegrationStep::Airspeed => {
                let target = state.throttle * self.spec.max_speed;
                state.airspeed = approach(state.airspeed, target, AIRSPEED_LAG, dt).max(0.0);
            }
            IntegrationStep::EngineRpm => {
                if state.engine_running() {
                    let engine = &self.spec.engine;
                    let target = engine.idle_rpm + state.throttle * engine.rpm_span;
                    state.rpm = approach(state.rpm, target, RPM_LAG, dt).max(0.0);
                }
            }
            IntegrationStep::VerticalSpeed => {
                let target = target_vertical_speed(state, &self.spec);
                state.vertical_speed = approach(state.vertical_speed, target, VERTICAL_SPEED_LAG, dt);
            }
            IntegrationStep::FuelBurn => {
                state.fuel = (state.fuel - state.throttle * self.spec.engine.fuel_burn_rate * dt)
                    .clamp(0.0, 100.0);
                if !state.engine_running() {
                    state.rpm = (state.rpm - self.spec.engine.flameout_decay * dt).max(0.0);
                }
            }
            IntegrationStep::RollLeveling => {
                if state.aileron.abs() < ROLL_LEVELING_DEADBAND {
                    state.roll *= ROLL_LEVELING_FACTOR;
                }
            }
            IntegrationStep::Stall => {
                let ground = self
                    .airfield
                    .elevation_at(state.position.x, state.position.z);
                // no stall sink or jitter while sitting on the ground
                if state.position.y > ground && state.airspeed < self.spec.stall_onset_speed() {
                    state.vertical_speed -= GRAVITY * dt;
                    if state.roll.abs() < STALL_JITTER_MAX_BANK {
                        let jitter = (self.rng.next_unit() - 0.5) * STALL_JITTER_RATE * dt;
                        state.roll = (state.roll + jitter)
                            .clamp(-self.spec.roll_limit, self.spec.roll_limit);
                    }
                }
            }
        }
    }

    fn log_transitions(&mut self, state: &AircraftState) {
        let ground = self
            .airfield
            .elevation_at(state.position.x, state.position.z);
        let now = Regime {
            on_ground: state.position.y <= ground,
            stalled: state.airspeed < self.spec.stall_onset_speed(),
            flamed_out: !state.engine_running(),
        };

        if now.on_ground != self.regime.on_ground {
            if now.on_ground {
                info!("Ground contact at ({:.1}, {:.1})", state.position.x, state.position.z);
            } else {
                info!("Airborne, airspeed {:.1} m/s", state.airspeed);
            }
        }
        if now.stalled != self.regime.stalled && !now.on_ground {
            if now.stalled {
                info!("Stall, airspeed {:.1} m/s", state.airspeed);
            } else {
                info!("Stall recovered, airspeed {:.1} m/s", state.airspeed);
            }
        }
        if now.flamed_out && !self.regime.flamed_out {
            info!("Fuel exhausted, engine flame-out");
        }
        self.regime = now;
    }
}

impl AircraftState {
    /// Advance this state through `model`. See `FlightModel::integrate`.
    pub fn integrate<R: RandomSource>(
        &mut self,
        dt: f64,
        controls: &ControlInputs,
        model: &mut FlightModel<R>,
    ) -> Result<(), SimError> {
        model.integrate(self, controls, dt)
    }
}

/// Reject timesteps that would poison the state.
pub fn validate_timestep(dt: f64) -> Result<(), SimError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimestep(dt))
    }
}

/// Explicit Euler step along the nose direction.
fn integrate_position(state: &mut AircraftState, dt: f64) {
    let heading = deg_to_rad(state.heading);
    let pitch = deg_to_rad(state.pitch);
    let horizontal = state.airspeed * pitch.cos();

    state.position.x += horizontal * heading.sin() * dt;
    state.position.y += state.airspeed * pitch.sin() * dt;
    state.position.z -= horizontal * heading.cos() * dt;
}

/// Hard floor: no bounce, no penetration, no nose-down attitude on the ground.
fn clamp_to_ground(state: &mut AircraftState, ground: f64) {
    if state.position.y < ground {
        state.position.y = ground;
        state.vertical_speed = 0.0;
        state.pitch = state.pitch.max(0.0);
    }
}

/// Climb is limited by pitch and by available airspeed, descent only by
/// pitch. No climb at or above the service ceiling.
fn target_vertical_speed(state: &AircraftState, spec: &AircraftSpec) -> f64 {
    if state.pitch > 0.0 {
        if state.altitude() >= spec.max_altitude {
            return 0.0;
        }
        let pitch_factor = state.pitch / PITCH_RATE_REFERENCE;
        let speed_factor = (state.airspeed / spec.cruise_speed).min(1.0);
        spec.climb_rate * pitch_factor * speed_factor
    } else if state.pitch < 0.0 {
        -spec.descent_rate * state.pitch.abs() / PITCH_RATE_REFERENCE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::aircraft::ThrottleCommand;
    use crate::utils::FixedRandom;
    use approx::assert_relative_eq;

    fn model() -> FlightModel<FixedRandom> {
        FlightModel::new(
            AircraftSpec::cessna_172(),
            Airfield::indianapolis(),
            FixedRandom::default(),
        )
    }

    fn airborne(altitude: f64, airspeed: f64, throttle: f64) -> AircraftState {
        let mut state = AircraftState::default();
        state.position.y = altitude;
        state.airspeed = airspeed;
        state.throttle = throttle;
        state
    }

    #[test]
    fn test_step_order() {
        use IntegrationStep::*;
        assert_eq!(
            IntegrationStep::ORDER,
            [
                Position,
                GroundContact,
                AttitudeRates,
                BankCoupling,
                AttitudeLimits,
                Airspeed,
                EngineRpm,
                VerticalSpeed,
                FuelBurn,
                RollLeveling,
                Stall,
            ]
        );
    }

    #[test]
    fn test_rejects_invalid_timesteps() {
        let mut model = model();
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let mut state = airborne(1000.0, 50.0, 0.5);
            let before = state.clone();
            let controls = ControlInputs::new(1.0, 1.0, 1.0, ThrottleCommand::Set(1.0));
            let result = model.integrate(&mut state, &controls, dt);
            assert!(matches!(result, Err(SimError::InvalidTimestep(_))));
            assert_eq!(state, before, "state changed for dt={dt}");
        }
    }

    #[test]
    fn test_euler_position_step() {
        let mut model = model();
        let mut state = airborne(1000.0, 50.0, 50.0 / 72.0216);
        state.heading = 90.0;
        let start = state.position;

        model.step(&mut state, 0.1).unwrap();

        assert_relative_eq!(state.position.x - start.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(state.position.y, start.y, epsilon = 1e-9);
        assert_relative_eq!(state.position.z, start.z, epsilon = 1e-9);
    }

    #[test]
    fn test_ground_clamp_precedes_attitude_update() {
        let mut model = model();
        let ground = model.airfield().elevation;
        let mut state = airborne(ground + 0.5, 60.0, 1.0);
        state.pitch = -20.0;
        state.vertical_speed = -50.0;
        let controls = ControlInputs::new(-1.0, 0.0, 0.0, ThrottleCommand::Hold);

        model.integrate(&mut state, &controls, 0.1).unwrap();

        assert_eq!(state.position.y, ground);
        // clamped to level first, then the elevator pushed the nose down
        assert_relative_eq!(state.pitch, -2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_bank_induces_turn() {
        let mut model = model();
        let mut state = airborne(1000.0, 60.0, 1.0);
        state.heading = 0.0;
        state.roll = 30.0;

        model.step(&mut state, 0.1).unwrap();

        assert_relative_eq!(state.heading, 0.5, epsilon = 1e-9);
        assert_relative_eq!(state.roll, 30.0 * ROLL_LEVELING_FACTOR, epsilon = 1e-9);
    }

    #[test]
    fn test_roll_holds_while_aileron_commanded() {
        let mut model = model();
        let mut state = airborne(1000.0, 60.0, 1.0);
        let controls = ControlInputs::new(0.0, 0.5, 0.0, ThrottleCommand::Hold);

        model.integrate(&mut state, &controls, 0.1).unwrap();

        assert_relative_eq!(state.roll, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_climb_needs_airspeed() {
        let spec = AircraftSpec::cessna_172();
        let mut state = airborne(1000.0, spec.cruise_speed / 2.0, 0.5);
        state.pitch = 10.0;
        assert_relative_eq!(
            target_vertical_speed(&state, &spec),
            spec.climb_rate / 2.0,
            epsilon = 1e-12
        );

        state.airspeed = spec.max_speed;
        state.pitch = 20.0;
        assert_relative_eq!(
            target_vertical_speed(&state, &spec),
            spec.climb_rate * 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_descent_ignores_airspeed() {
        let spec = AircraftSpec::cessna_172();
        let mut state = airborne(1000.0, 0.0, 0.0);
        state.pitch = -15.0;
        assert_relative_eq!(
            target_vertical_speed(&state, &spec),
            -spec.descent_rate * 1.5,
            epsilon = 1e-12
        );
        state.pitch = 0.0;
        assert_eq!(target_vertical_speed(&state, &spec), 0.0);
    }

    #[test]
    fn test_no_climb_above_ceiling() {
        let spec = AircraftSpec::cessna_172();
        let mut state = airborne(spec.max_altitude + 10.0, spec.max_speed, 1.0);
        state.pitch = 10.0;
        assert_eq!(target_vertical_speed(&state, &spec), 0.0);
    }

    #[test]
    fn test_stall_sink_and_jitter() {
        let mut model = FlightModel::new(
            AircraftSpec::cessna_172(),
            Airfield::indianapolis(),
            FixedRandom(1.0),
        );
        let mut state = airborne(1000.0, 10.0, 0.0);

        model.step(&mut state, 0.1).unwrap();

        assert_relative_eq!(state.vertical_speed, -GRAVITY * 0.1, epsilon = 1e-9);
        assert_relative_eq!(state.roll, 0.5 * STALL_JITTER_RATE * 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_no_stall_jitter_when_banked() {
        let mut model = FlightModel::new(
            AircraftSpec::cessna_172(),
            Airfield::indianapolis(),
            FixedRandom(1.0),
        );
        let mut state = airborne(1000.0, 10.0, 0.0);
        state.roll = 20.0;

        model.step(&mut state, 0.1).unwrap();

        assert_relative_eq!(state.roll, 20.0 * ROLL_LEVELING_FACTOR, epsilon = 1e-9);
    }

    #[test]
    fn test_no_stall_on_the_ground() {
        let mut model = FlightModel::new(
            AircraftSpec::cessna_172(),
            Airfield::indianapolis(),
            FixedRandom(1.0),
        );
        let mut state = AircraftState::default();

        for _ in 0..50 {
            model.step(&mut state, 0.1).unwrap();
        }

        assert_eq!(state.vertical_speed, 0.0);
        assert_eq!(state.roll, 0.0);
    }

    #[test]
    fn test_flameout_decays_rpm() {
        let mut model = model();
        let mut state = airborne(1000.0, 60.0, 1.0);
        state.rpm = 2800.0;
        state.fuel = 0.0;

        model.step(&mut state, 0.1).unwrap();

        assert_relative_eq!(state.rpm, 2750.0, epsilon = 1e-9);
        assert_eq!(state.fuel, 0.0);
    }

    #[test]
    fn test_seeded_models_agree() {
        let run = |seed| {
            let mut model =
                FlightModel::seeded(AircraftSpec::cessna_172(), Airfield::indianapolis(), Some(seed));
            let mut state = airborne(1000.0, 5.0, 0.0);
            for _ in 0..20 {
                model.step(&mut state, 0.05).unwrap();
            }
            state
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11).roll, run(12).roll);
    }
}
