use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::FEET_TO_METERS;

/// Ground height lookup used as the collision floor.
pub trait GroundElevation {
    /// Ground elevation (m MSL) below the world point (x, z).
    fn elevation_at(&self, x: f64, z: f64) -> f64;
}

/// Reference airport the aircraft starts from and collides with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Airfield {
    /// ICAO identifier.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Field elevation (m MSL).
    pub elevation: f64,
    /// Parking spot east of the origin (m).
    pub start_x: f64,
    /// Parking spot along the world z axis (m).
    pub start_z: f64,
    /// Runway heading at the parking spot (deg).
    pub start_heading: f64,
}

impl Default for Airfield {
    fn default() -> Self {
        Self::indianapolis()
    }
}

impl Airfield {
    /// KIND, Indianapolis International, parked 500 m down runway 23.
    pub fn indianapolis() -> Self {
        Self {
            name: "KIND".to_string(),
            latitude: 39.7173,
            longitude: -86.2944,
            elevation: 797.0 * FEET_TO_METERS,
            start_x: 500.0,
            start_z: 0.0,
            start_heading: 230.0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("elevation", self.elevation),
            ("start_x", self.start_x),
            ("start_z", self.start_z),
            ("start_heading", self.start_heading),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "airfield {name} must be finite, got {value}"
            )));
        }
        Ok(())
    }
}

impl GroundElevation for Airfield {
    fn elevation_at(&self, _x: f64, _z: f64) -> f64 {
        self.elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_field_elevation() {
        let field = Airfield::indianapolis();
        assert_relative_eq!(field.elevation, 242.9256, epsilon = 1e-9);
        assert_eq!(field.elevation_at(-12_000.0, 40_000.0), field.elevation);
    }

    #[test]
    fn test_rejects_non_finite_start() {
        let mut field = Airfield::indianapolis();
        field.start_heading = f64::INFINITY;
        assert!(field.validate().is_err());
    }
}
