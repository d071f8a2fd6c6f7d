use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::camera::core::Camera;

/// Keeps polar angles strictly inside (0, PI) so the azimuth stays defined.
const POLAR_EPSILON: f32 = 1e-6;

/// Orbit-style user controls that own the camera's look-at point.
///
/// The fly-to animation drives the camera through this seam when the host
/// has controls attached, so user orbiting and scripted motion agree on the
/// current target.
pub trait OrbitControls {
    /// Current orbit pivot.
    fn target(&self) -> Vec3;

    /// Move the orbit pivot without touching the camera.
    fn set_target(&mut self, target: Vec3);

    /// Re-apply the control constraints to the camera after the eye or
    /// pivot changed.
    fn update(&mut self, camera: &mut Camera);
}

/// Orbit controls with distance and polar-angle limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    /// Orbit pivot.
    pub target: Vec3,
    /// Closest allowed eye distance from the pivot.
    pub min_distance: f32,
    /// Farthest allowed eye distance from the pivot.
    pub max_distance: f32,
    /// Largest angle between +Y and the eye offset, in radians.
    pub max_polar_angle: f32,
}

impl OrbitRig {
    /// Rig around `target` with the map's default limits.
    #[must_use]
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            min_distance: 200.0,
            max_distance: 800.0,
            max_polar_angle: FRAC_PI_2,
        }
    }

    /// Rig that never constrains the camera.
    #[must_use]
    pub fn unbounded(target: Vec3) -> Self {
        Self {
            target,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            max_polar_angle: PI,
        }
    }

    /// Clamp an eye offset (eye minus pivot) to the rig limits. Returns
    /// `None` when the offset already satisfies them.
    #[must_use]
    pub fn constrain(&self, offset: Vec3) -> Option<Vec3> {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return None;
        }
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let max_polar = self
            .max_polar_angle
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let clamped_radius = radius
            .clamp(self.min_distance, self.max_distance.max(self.min_distance));
        let clamped_polar = polar.clamp(POLAR_EPSILON, max_polar);

        if clamped_radius == radius && clamped_polar == polar {
            return None;
        }

        let azimuth = offset.x.atan2(offset.z);
        let (sin_polar, cos_polar) = clamped_polar.sin_cos();
        Some(
            Vec3::new(
                sin_polar * azimuth.sin(),
                cos_polar,
                sin_polar * azimuth.cos(),
            ) * clamped_radius,
        )
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl OrbitControls for OrbitRig {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn update(&mut self, camera: &mut Camera) {
        if let Some(offset) = self.constrain(camera.eye - self.target) {
            camera.eye = self.target + offset;
        }
        camera.look_at(self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_clamped() {
        let mut rig = OrbitRig::new(Vec3::ZERO);
        let mut camera =
            Camera::new(Vec3::new(0.0, 50.0, 50.0), Vec3::ZERO, 1.0, 50.0);
        rig.update(&mut camera);
        assert!((camera.eye.length() - 200.0).abs() < 1e-3);

        camera.eye = Vec3::new(0.0, 1000.0, 1000.0);
        rig.update(&mut camera);
        assert!((camera.eye.length() - 800.0).abs() < 1e-2);
    }

    #[test]
    fn camera_cannot_go_below_the_plane() {
        let mut rig = OrbitRig::new(Vec3::ZERO);
        let mut camera =
            Camera::new(Vec3::new(0.0, -100.0, 300.0), Vec3::ZERO, 1.0, 50.0);
        rig.update(&mut camera);
        assert!(camera.eye.y.abs() < 1e-3);
        assert!(camera.eye.z > 0.0);
    }

    #[test]
    fn satisfied_constraints_leave_eye_untouched() {
        let mut rig = OrbitRig::new(Vec3::new(10.0, 0.0, 10.0));
        let eye = Vec3::new(10.0, 300.0, 310.0);
        let mut camera = Camera::new(eye, Vec3::ZERO, 1.0, 50.0);
        rig.update(&mut camera);
        assert_eq!(camera.eye, eye);
        assert_eq!(camera.target, rig.target);
    }
}
