// Unit conversions
pub const FEET_TO_METERS: f64 = 0.3048;
pub const KNOTS_TO_MPS: f64 = 0.51444;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

pub const GRAVITY: f64 = 9.8; // m/s^2, sink added while stalled

// Response gains of the first-order model (1/s)
pub const AIRSPEED_LAG: f64 = 0.5;
pub const RPM_LAG: f64 = 2.0;
pub const VERTICAL_SPEED_LAG: f64 = 0.5;

/// Heading drift per second at 90 degrees of bank (deg/s).
pub const BANK_TURN_GAIN: f64 = 10.0;
/// Pitch in degrees that yields the full climb or descent rate.
pub const PITCH_RATE_REFERENCE: f64 = 10.0;

/// Aileron magnitude under which the wings are left to level themselves.
pub const ROLL_LEVELING_DEADBAND: f64 = 0.1;
/// Fraction of bank kept per tick while leveling.
pub const ROLL_LEVELING_FACTOR: f64 = 0.95;

/// Stall onset as a fraction of the published stall speed.
pub const STALL_ONSET_RATIO: f64 = 0.9;
/// Stall warning threshold as a multiple of the published stall speed.
pub const STALL_WARNING_RATIO: f64 = 1.1;
/// Roll jitter is only injected while the bank is below this (deg).
pub const STALL_JITTER_MAX_BANK: f64 = 5.0;
/// Peak-to-peak stall roll jitter (deg/s).
pub const STALL_JITTER_RATE: f64 = 10.0;

pub const MIN_FIXED_TIMESTEP: f64 = 1.0 / 1000.0;
