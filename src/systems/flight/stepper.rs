use bevy::log::warn;
use serde::{Deserialize, Serialize};

use crate::utils::{errors::SimError, MIN_FIXED_TIMESTEP};

/// How frame time is turned into integration ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestepMode {
    /// One tick per frame with the measured frame time.
    #[default]
    Variable,
    /// Constant ticks drawn from an accumulator of frame time.
    Fixed { timestep: f64, max_substeps: u32 },
}

impl TimestepMode {
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            TimestepMode::Variable => Ok(()),
            TimestepMode::Fixed {
                timestep,
                max_substeps,
            } => {
                if !timestep.is_finite() || timestep < MIN_FIXED_TIMESTEP {
                    Err(format!(
                        "fixed timestep must be at least {MIN_FIXED_TIMESTEP} s, got {timestep}"
                    ))
                } else if max_substeps == 0 {
                    Err("max_substeps must be at least 1".to_string())
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Ticks to run for one frame, all of length `dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    pub ticks: u32,
    pub dt: f64,
}

impl StepPlan {
    fn idle() -> Self {
        Self { ticks: 0, dt: 0.0 }
    }
}

#[derive(Debug, Clone)]
pub struct TimeStepper {
    mode: TimestepMode,
    accumulator: f64,
}

impl TimeStepper {
    pub fn new(mode: TimestepMode) -> Self {
        Self {
            mode,
            accumulator: 0.0,
        }
    }

    pub fn mode(&self) -> TimestepMode {
        self.mode
    }

    /// Unconsumed frame time in fixed mode (s).
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Plan the ticks for a frame that lasted `frame_dt` seconds. A zero
    /// frame runs nothing; negative or non-finite frames are rejected.
    pub fn plan(&mut self, frame_dt: f64) -> Result<StepPlan, SimError> {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            warn!("Rejected frame time {}", frame_dt);
            return Err(SimError::InvalidTimestep(frame_dt));
        }
        if frame_dt == 0.0 {
            return Ok(StepPlan::idle());
        }

        match self.mode {
            TimestepMode::Variable => Ok(StepPlan {
                ticks: 1,
                dt: frame_dt,
            }),
            TimestepMode::Fixed {
                timestep,
                max_substeps,
            } => {
                self.accumulator += frame_dt;
                let due = (self.accumulator / timestep).floor();
                let ticks = if due > max_substeps as f64 {
                    let dropped = due - max_substeps as f64;
                    warn!(
                        "Dropping {} fixed substeps ({:.3} s) to keep up",
                        dropped,
                        dropped * timestep
                    );
                    self.accumulator %= timestep;
                    max_substeps
                } else {
                    self.accumulator -= due * timestep;
                    due as u32
                };
                Ok(StepPlan { ticks, dt: timestep })
            }
        }
    }
}

impl Default for TimeStepper {
    fn default() -> Self {
        Self::new(TimestepMode::default())
    }
}
