use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Pilot eye placement and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position in the body frame (m): right, up, forward is -z.
    pub eye_offset: Vector3<f64>,
    /// Vertical field of view (deg).
    pub fov: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_offset: Vector3::new(0.0, 0.1, -0.3),
            fov: 60.0,
            near: 0.1,
            far: 100_000.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.eye_offset.iter().all(|v| v.is_finite()) {
            return Err(format!("camera eye_offset must be finite, got {:?}", self.eye_offset));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(format!("camera fov must be in (0, 180), got {}", self.fov));
        }
        if !(self.near > 0.0 && self.far.is_finite() && self.far > self.near) {
            return Err(format!(
                "camera clip planes must satisfy 0 < near < far, got {} and {}",
                self.near, self.far
            ));
        }
        Ok(())
    }
}
