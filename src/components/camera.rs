use bevy::prelude::*;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::aircraft::AircraftState;
use crate::utils::deg_to_rad;

/// Marker for the camera that rides in the pilot seat.
#[derive(Component, Debug, Default)]
pub struct CockpitCamera;

/// World-space pilot eye and view basis for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position in world space (m).
    pub eye: Vector3<f64>,
    /// Unit look direction in world space.
    pub forward: Vector3<f64>,
    /// Unit up direction in world space.
    pub up: Vector3<f64>,
    /// Body-to-world rotation of the aircraft.
    pub orientation: Rotation3<f64>,
}

impl CameraPose {
    /// World-to-eye rotation used to build a view matrix.
    pub fn view_rotation(&self) -> Rotation3<f64> {
        self.orientation.inverse()
    }

    /// Unit vector out of the pilot's right ear.
    pub fn right(&self) -> Vector3<f64> {
        self.forward.cross(&self.up)
    }
}

/// Maps aircraft attitude to the pilot's eye pose. Stateless.
pub struct CameraTransform;

impl CameraTransform {
    /// Body-frame look direction: the nose points down -z.
    pub fn forward_axis() -> Vector3<f64> {
        -Vector3::z()
    }

    pub fn up_axis() -> Vector3<f64> {
        Vector3::y()
    }

    /// World-to-eye rotation `Roll · Pitch · Heading`: heading is applied
    /// first, then pitch, then roll.
    pub fn view_rotation(heading: f64, pitch: f64, roll: f64) -> Rotation3<f64> {
        let heading = Rotation3::from_axis_angle(&Vector3::y_axis(), deg_to_rad(heading));
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), -deg_to_rad(pitch));
        let roll = Rotation3::from_axis_angle(&Vector3::z_axis(), deg_to_rad(roll));
        roll * pitch * heading
    }

    pub fn compute(
        position: &Vector3<f64>,
        heading: f64,
        pitch: f64,
        roll: f64,
        eye_offset: &Vector3<f64>,
    ) -> CameraPose {
        let orientation = Self::view_rotation(heading, pitch, roll).inverse();
        CameraPose {
            eye: position + orientation * eye_offset,
            forward: orientation * Self::forward_axis(),
            up: orientation * Self::up_axis(),
            orientation,
        }
    }

    pub fn from_state(state: &AircraftState, eye_offset: &Vector3<f64>) -> CameraPose {
        Self::compute(
            &state.position,
            state.heading,
            state.pitch,
            state.roll,
            eye_offset,
        )
    }
}
