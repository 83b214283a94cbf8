use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::{FEET_TO_METERS, KNOTS_TO_MPS, SECONDS_PER_MINUTE};

/// Fixed performance table for one aircraft type, in SI units.
///
/// Speeds are in m/s, climb and descent rates are positive magnitudes in
/// m/s, angular rates and limits are in degrees (per second).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftSpec {
    /// Name of the aircraft, shown in the window title.
    pub name: String,
    /// Airspeed reached at full throttle (m/s).
    pub max_speed: f64,
    /// Airspeed above which the full climb rate is available (m/s).
    pub cruise_speed: f64,
    /// Published stall speed (m/s).
    pub stall_speed: f64,
    /// Climb rate at the reference pitch (m/s).
    pub climb_rate: f64,
    /// Descent rate at the reference pitch, as a positive magnitude (m/s).
    pub descent_rate: f64,
    /// Service ceiling (m MSL).
    pub max_altitude: f64,
    /// Full-deflection roll rate (deg/s).
    pub roll_rate: f64,
    /// Full-deflection pitch rate (deg/s).
    pub pitch_rate: f64,
    /// Full-deflection yaw rate (deg/s).
    pub yaw_rate: f64,
    /// Symmetric pitch attitude limit (deg).
    pub pitch_limit: f64,
    /// Symmetric bank limit (deg).
    pub roll_limit: f64,
    pub engine: EngineSpec,
}

/// Piston engine and fuel system parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSpec {
    pub idle_rpm: f64,
    /// RPM added on top of idle at full throttle.
    pub rpm_span: f64,
    /// Fuel burned at full throttle (percent of capacity per second).
    pub fuel_burn_rate: f64,
    /// RPM lost per second once the tanks are dry.
    pub flameout_decay: f64,
}

impl Default for AircraftSpec {
    fn default() -> Self {
        Self::cessna_172()
    }
}

impl Default for EngineSpec {
    fn default() -> Self {
        Self::lycoming_o320()
    }
}

impl EngineSpec {
    /// Roughly 2800 RPM redline.
    pub fn lycoming_o320() -> Self {
        Self {
            idle_rpm: 500.0,
            rpm_span: 2300.0,
            fuel_burn_rate: 0.05,
            flameout_decay: 500.0,
        }
    }

    pub fn max_rpm(&self) -> f64 {
        self.idle_rpm + self.rpm_span
    }
}

impl AircraftSpec {
    pub fn cessna_172() -> Self {
        let fpm = FEET_TO_METERS / SECONDS_PER_MINUTE;
        Self {
            name: "Cessna 172".to_string(),
            max_speed: 140.0 * KNOTS_TO_MPS,
            cruise_speed: 122.0 * KNOTS_TO_MPS,
            stall_speed: 50.0 * KNOTS_TO_MPS,
            climb_rate: 700.0 * fpm,
            descent_rate: 500.0 * fpm,
            max_altitude: 14_000.0 * FEET_TO_METERS,
            roll_rate: 60.0,
            pitch_rate: 25.0,
            yaw_rate: 20.0,
            pitch_limit: 30.0,
            roll_limit: 60.0,
            engine: EngineSpec::lycoming_o320(),
        }
    }

    /// Airspeed under which the stall model takes over (m/s).
    pub fn stall_onset_speed(&self) -> f64 {
        self.stall_speed * crate::utils::STALL_ONSET_RATIO
    }

    /// Airspeed under which the stall warning is raised (m/s).
    pub fn stall_warning_speed(&self) -> f64 {
        self.stall_speed * crate::utils::STALL_WARNING_RATIO
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_speed", self.max_speed),
            ("cruise_speed", self.cruise_speed),
            ("stall_speed", self.stall_speed),
            ("climb_rate", self.climb_rate),
            ("descent_rate", self.descent_rate),
            ("max_altitude", self.max_altitude),
            ("roll_rate", self.roll_rate),
            ("pitch_rate", self.pitch_rate),
            ("yaw_rate", self.yaw_rate),
            ("pitch_limit", self.pitch_limit),
            ("roll_limit", self.roll_limit),
            ("engine.rpm_span", self.engine.rpm_span),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("engine.idle_rpm", self.engine.idle_rpm),
            ("engine.fuel_burn_rate", self.engine.fuel_burn_rate),
            ("engine.flameout_decay", self.engine.flameout_decay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !(self.stall_speed < self.cruise_speed && self.cruise_speed <= self.max_speed) {
            return Err(ConfigError::ValidationError(format!(
                "expected stall_speed < cruise_speed <= max_speed, got {} / {} / {}",
                self.stall_speed, self.cruise_speed, self.max_speed
            )));
        }

        if self.pitch_limit >= 90.0 || self.roll_limit >= 90.0 {
            return Err(ConfigError::ValidationError(
                "attitude limits must stay below 90 degrees".to_string(),
            ));
        }

        Ok(())
    }
}
