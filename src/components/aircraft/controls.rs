use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::errors::SimError;

/// How the throttle lever moves this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ThrottleCommand {
    /// Leave the lever where it is.
    #[default]
    Hold,
    /// Move the lever to an absolute position in [0, 1].
    Set(f64),
    /// Nudge the lever by a signed amount.
    Adjust(f64),
}

impl ThrottleCommand {
    /// Lever position after applying the command to `current`, clamped to [0, 1].
    pub fn apply(self, current: f64) -> f64 {
        let next = match self {
            ThrottleCommand::Hold => current,
            ThrottleCommand::Set(value) if value.is_finite() => value,
            ThrottleCommand::Adjust(delta) if delta.is_finite() => current + delta,
            _ => current,
        };
        next.clamp(0.0, 1.0)
    }
}

/// Normalized pilot inputs for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Pitch axis, positive is nose up [-1, 1].
    pub elevator: f64,
    /// Roll axis, positive is right wing down [-1, 1].
    pub aileron: f64,
    /// Yaw axis, positive is nose right [-1, 1].
    pub rudder: f64,
    pub throttle: ThrottleCommand,
}

impl ControlInputs {
    pub fn new(elevator: f64, aileron: f64, rudder: f64, throttle: ThrottleCommand) -> Self {
        Self {
            elevator,
            aileron,
            rudder,
            throttle,
        }
    }

    /// Strict bounds check for inputs coming from outside the input layer.
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("elevator", self.elevator),
            ("aileron", self.aileron),
            ("rudder", self.rudder),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(SimError::InvalidControl(format!(
                    "{name} out of bounds: {value}"
                )));
            }
        }
        if let ThrottleCommand::Set(value) = self.throttle {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidControl(format!(
                    "throttle out of bounds: {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Discrete cockpit events, applied between ticks.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    CycleFlaps,
    ToggleGear,
    Reset,
}

/// Flap lever detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlapSetting {
    #[default]
    Up,
    Ten,
    Twenty,
    Thirty,
}

impl FlapSetting {
    const DETENTS: [FlapSetting; 4] = [
        FlapSetting::Up,
        FlapSetting::Ten,
        FlapSetting::Twenty,
        FlapSetting::Thirty,
    ];

    /// Detent for a lever index, clamped to the last detent.
    pub fn from_index(index: usize) -> Self {
        Self::DETENTS[index.min(Self::DETENTS.len() - 1)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn degrees(self) -> f64 {
        self.index() as f64 * 10.0
    }

    /// Next detent, wrapping from 30 degrees back to up.
    pub fn next(self) -> Self {
        Self::DETENTS[(self.index() + 1) % Self::DETENTS.len()]
    }
}
