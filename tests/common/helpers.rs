use flightdeck::{
    components::{AircraftSpec, AircraftState, Airfield, ControlInputs, ThrottleCommand},
    systems::flight::FlightModel,
    utils::FixedRandom,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flight model at KIND with a seeded jitter stream.
pub fn seeded_model(seed: u64) -> FlightModel {
    FlightModel::seeded(AircraftSpec::cessna_172(), Airfield::indianapolis(), Some(seed))
}

/// Flight model at KIND whose stall jitter sample is always `sample`.
pub fn fixed_model(sample: f64) -> FlightModel<FixedRandom> {
    FlightModel::new(
        AircraftSpec::cessna_172(),
        Airfield::indianapolis(),
        FixedRandom(sample),
    )
}

/// Aircraft in level flight over KIND.
pub fn level_flight(altitude: f64, airspeed: f64, throttle: f64) -> AircraftState {
    let mut state = AircraftState::parked(&Airfield::indianapolis());
    state.position.y = altitude;
    state.airspeed = airspeed;
    state.throttle = throttle;
    state
}

pub fn throttle(value: f64) -> ControlInputs {
    ControlInputs::new(0.0, 0.0, 0.0, ThrottleCommand::Set(value))
}

/// Arbitrary, possibly out-of-range pilot inputs.
pub fn random_controls(rng: &mut ChaCha8Rng) -> ControlInputs {
    let throttle = match rng.gen_range(0..3) {
        0 => ThrottleCommand::Hold,
        1 => ThrottleCommand::Set(rng.gen_range(-0.5..1.5)),
        _ => ThrottleCommand::Adjust(rng.gen_range(-0.2..0.2)),
    };
    ControlInputs::new(
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
        throttle,
    )
}

pub fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
