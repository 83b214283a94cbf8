use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::{AircraftSpec, AircraftState, FlapSetting};
use crate::utils::{FEET_TO_METERS, KNOTS_TO_MPS, SECONDS_PER_MINUTE};

/// Marker for the instrument text overlay.
#[derive(Component, Debug, Default)]
pub struct HudText;

/// Marker for the "STALL" banner, shown only near the stall.
#[derive(Component, Debug, Default)]
pub struct StallBanner;

/// Read-only cockpit readout in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudReadout {
    pub airspeed_kts: f64,
    pub altitude_ft: f64,
    pub heading_deg: f64,
    pub vertical_speed_fpm: f64,
    pub bank_deg: f64,
    pub pitch_deg: f64,
    pub rpm: f64,
    pub fuel_percent: f64,
    pub throttle_percent: f64,
    pub gear_down: bool,
    pub flaps: FlapSetting,
    pub stall_warning: bool,
}

impl HudReadout {
    pub fn from_state(state: &AircraftState, spec: &AircraftSpec) -> Self {
        Self {
            airspeed_kts: state.airspeed / KNOTS_TO_MPS,
            altitude_ft: state.altitude() / FEET_TO_METERS,
            heading_deg: state.heading,
            vertical_speed_fpm: state.vertical_speed / FEET_TO_METERS * SECONDS_PER_MINUTE,
            bank_deg: state.roll,
            pitch_deg: state.pitch,
            rpm: state.rpm,
            fuel_percent: state.fuel,
            throttle_percent: state.throttle * 100.0,
            gear_down: state.gear_down,
            flaps: state.flaps,
            stall_warning: state.near_stall(spec),
        }
    }

    /// Overlay text, one instrument per line, rounded to whole units.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("SPD: {} kts", whole(self.airspeed_kts)),
            format!("ALT: {} ft", whole(self.altitude_ft)),
            format!("HDG: {}°", whole(self.heading_deg)),
            format!("VS: {} fpm", whole(self.vertical_speed_fpm)),
            format!("BANK: {}°", whole(self.bank_deg)),
            format!("PITCH: {}°", whole(self.pitch_deg)),
            format!("RPM: {}", whole(self.rpm)),
            format!("FUEL: {}%", whole(self.fuel_percent)),
            format!("THROT: {}%", whole(self.throttle_percent)),
            format!("GEAR: {}", if self.gear_down { "DOWN" } else { "UP" }),
            format!("FLAPS: {}°", self.flaps.degrees()),
        ]
    }
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parked_readout() {
        let spec = AircraftSpec::cessna_172();
        let readout = HudReadout::from_state(&AircraftState::default(), &spec);

        assert_eq!(readout.altitude_ft.round(), 797.0);
        assert_eq!(readout.heading_deg, 230.0);
        assert!(readout.stall_warning);
        assert_eq!(
            readout.lines(),
            vec![
                "SPD: 0 kts",
                "ALT: 797 ft",
                "HDG: 230°",
                "VS: 0 fpm",
                "BANK: 0°",
                "PITCH: 0°",
                "RPM: 0",
                "FUEL: 100%",
                "THROT: 0%",
                "GEAR: DOWN",
                "FLAPS: 0°",
            ]
        );
    }

    #[test]
    fn test_cruise_readout() {
        let spec = AircraftSpec::cessna_172();
        let mut state = AircraftState::default();
        state.airspeed = 100.0 * KNOTS_TO_MPS;
        state.vertical_speed = 500.0 * FEET_TO_METERS / SECONDS_PER_MINUTE;
        state.throttle = 0.75;
        state.gear_down = false;
        state.flaps = FlapSetting::Twenty;

        let readout = HudReadout::from_state(&state, &spec);
        assert!(!readout.stall_warning);
        assert!((readout.airspeed_kts - 100.0).abs() < 1e-9);
        assert!((readout.vertical_speed_fpm - 500.0).abs() < 1e-9);

        let lines = readout.lines();
        assert_eq!(lines[8], "THROT: 75%");
        assert_eq!(lines[9], "GEAR: UP");
        assert_eq!(lines[10], "FLAPS: 20°");
    }
}
