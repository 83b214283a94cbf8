use approx::assert_relative_eq;
use flightdeck::components::{AircraftSpec, AircraftState, CameraPose};
use nalgebra::Vector3;

/// Assert every post-tick range invariant.
#[track_caller]
pub fn assert_invariants(state: &AircraftState, spec: &AircraftSpec, ground: f64) {
    if let Err(e) = state.check_invariants(spec, ground) {
        panic!("{e}");
    }
}

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert the pose basis is unit length and mutually perpendicular.
#[track_caller]
pub fn assert_orthonormal(pose: &CameraPose) {
    assert_relative_eq!(pose.forward.norm(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(pose.up.norm(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(pose.forward.dot(&pose.up), 0.0, epsilon = 1e-9);
}
