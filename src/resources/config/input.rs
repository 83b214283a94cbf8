use serde::{Deserialize, Serialize};

/// Pilot input tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Mouse yoke gain; an axis moves `sensitivity / 10` per pixel.
    pub mouse_sensitivity: f64,
    /// Throttle travel per frame while a throttle key is held.
    pub throttle_step: f64,
    /// Released axes snap to zero only below this magnitude.
    pub deadband: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.1,
            throttle_step: 0.01,
            deadband: 0.1,
        }
    }
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("throttle_step", self.throttle_step),
            ("deadband", self.deadband),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("input {name} must be finite and non-negative, got {value}"));
            }
        }
        if self.deadband > 1.0 {
            return Err(format!("input deadband must be at most 1, got {}", self.deadband));
        }
        Ok(())
    }
}
