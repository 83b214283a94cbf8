use bevy::prelude::*;

use crate::components::{CameraPose, CockpitCamera};
use crate::resources::FlightSimulation;

/// Render transform for a pose: the camera looks down its local -z.
pub fn pose_to_transform(pose: &CameraPose) -> Transform {
    let forward = pose.forward.cast::<f32>();
    let up = pose.up.cast::<f32>();
    let right = forward.cross(&up);
    let eye = pose.eye.cast::<f32>();

    let basis = Mat3::from_cols(
        Vec3::new(right.x, right.y, right.z),
        Vec3::new(up.x, up.y, up.z),
        Vec3::new(-forward.x, -forward.y, -forward.z),
    );
    Transform {
        translation: Vec3::new(eye.x, eye.y, eye.z),
        rotation: Quat::from_mat3(&basis).normalize(),
        scale: Vec3::ONE,
    }
}

pub fn cockpit_camera_system(
    simulation: Res<FlightSimulation>,
    mut cameras: Query<&mut Transform, With<CockpitCamera>>,
) {
    let transform = pose_to_transform(&simulation.camera_pose());
    for mut camera in cameras.iter_mut() {
        *camera = transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CameraTransform;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_transform_looks_along_pose() {
        let eye = Vector3::new(0.0, 0.1, -0.3);
        let pose = CameraTransform::compute(&Vector3::new(500.0, 243.0, 0.0), 230.0, 10.0, -20.0, &eye);
        let transform = pose_to_transform(&pose);

        let forward = transform.forward();
        let up = transform.up();
        assert_relative_eq!(forward.x, pose.forward.x as f32, epsilon = 1e-5);
        assert_relative_eq!(forward.y, pose.forward.y as f32, epsilon = 1e-5);
        assert_relative_eq!(forward.z, pose.forward.z as f32, epsilon = 1e-5);
        assert_relative_eq!(up.y, pose.up.y as f32, epsilon = 1e-5);
        assert_relative_eq!(transform.translation.x, pose.eye.x as f32, epsilon = 1e-3);
    }
}
