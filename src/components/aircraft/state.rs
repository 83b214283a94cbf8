use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::{Airfield, AircraftSpec, ControlInputs, ControlEvent, FlapSetting};
use crate::utils::{errors::SimError, finite_or_zero};

/// Every mutable flight variable of the simulated aircraft.
///
/// World frame: x east, y up, z toward the south (north is -z). Angles are
/// in degrees. Only `FlightModel::integrate` advances the flight variables;
/// the input layer writes the control fields through `apply_controls`.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in world space (m), y is altitude MSL.
    pub position: Vector3<f64>,
    /// Compass heading, [0, 360).
    pub heading: f64,
    /// Nose-up positive pitch attitude.
    pub pitch: f64,
    /// Right-wing-down positive bank.
    pub roll: f64,
    /// Airspeed (m/s), never negative.
    pub airspeed: f64,
    /// Smoothed vertical speed (m/s).
    pub vertical_speed: f64,

    /// Throttle lever, [0, 1].
    pub throttle: f64,
    pub elevator: f64,
    pub aileron: f64,
    pub rudder: f64,
    pub flaps: FlapSetting,
    pub gear_down: bool,

    pub rpm: f64,
    /// Fuel remaining, percent of capacity.
    pub fuel: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::parked(&Airfield::default())
    }
}

impl AircraftState {
    /// Engine off and tanks full at the airfield's parking spot.
    pub fn parked(airfield: &Airfield) -> Self {
        Self {
            position: Vector3::new(airfield.start_x, airfield.elevation, airfield.start_z),
            heading: crate::utils::wrap_degrees(airfield.start_heading),
            pitch: 0.0,
            roll: 0.0,
            airspeed: 0.0,
            vertical_speed: 0.0,
            throttle: 0.0,
            elevator: 0.0,
            aileron: 0.0,
            rudder: 0.0,
            flaps: FlapSetting::Up,
            gear_down: true,
            rpm: 0.0,
            fuel: 100.0,
        }
    }

    /// Altitude above mean sea level (m).
    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// Write this tick's pilot inputs, clamped to their ranges.
    pub fn apply_controls(&mut self, controls: &ControlInputs) {
        self.elevator = finite_or_zero(controls.elevator).clamp(-1.0, 1.0);
        self.aileron = finite_or_zero(controls.aileron).clamp(-1.0, 1.0);
        self.rudder = finite_or_zero(controls.rudder).clamp(-1.0, 1.0);
        self.throttle = controls.throttle.apply(self.throttle);
    }

    /// Apply a flap or gear toggle. `Reset` is handled by the owner of the
    /// state, which replaces the whole value.
    pub fn apply_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::CycleFlaps => self.flaps = self.flaps.next(),
            ControlEvent::ToggleGear => self.gear_down = !self.gear_down,
            ControlEvent::Reset => {}
        }
    }

    pub fn engine_running(&self) -> bool {
        self.fuel > 0.0
    }

    pub fn near_stall(&self, spec: &AircraftSpec) -> bool {
        self.airspeed < spec.stall_warning_speed()
    }

    /// Check the range invariants that must hold after every tick.
    pub fn check_invariants(&self, spec: &AircraftSpec, ground: f64) -> Result<(), SimError> {
        let finite = self.position.iter().all(|v| v.is_finite())
            && [
                self.heading,
                self.pitch,
                self.roll,
                self.airspeed,
                self.vertical_speed,
                self.rpm,
                self.fuel,
            ]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(SimError::StateError(format!("non-finite state: {self:?}")));
        }

        let checks = [
            ("heading", (0.0..360.0).contains(&self.heading)),
            ("pitch", self.pitch.abs() <= spec.pitch_limit),
            ("roll", self.roll.abs() <= spec.roll_limit),
            ("throttle", (0.0..=1.0).contains(&self.throttle)),
            ("fuel", (0.0..=100.0).contains(&self.fuel)),
            ("airspeed", self.airspeed >= 0.0),
            ("rpm", self.rpm >= 0.0),
            ("altitude", self.position.y >= ground),
        ];
        match checks.iter().find(|(_, ok)| !ok) {
            Some((name, _)) => Err(SimError::StateError(format!(
                "{name} out of range: {self:?}"
            ))),
            None => Ok(()),
        }
    }
}
