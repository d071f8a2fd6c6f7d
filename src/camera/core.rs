use glam::{Mat4, Vec3};

/// Distance ahead of the eye used as a look-at point when no orbit
/// controls track one.
pub const LOOK_AHEAD_DISTANCE: f32 = 50.0;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking at `target` with Y up.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3, aspect: f32, fovy: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy,
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    /// Point the camera at `target` without moving it.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit view direction (eye toward target). Falls back to -Z when eye
    /// and target coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Look-at point derived from the view direction.
    #[must_use]
    pub fn look_ahead(&self) -> Vec3 {
        self.eye + self.forward() * LOOK_AHEAD_DISTANCE
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh uses the [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

impl Default for Camera {
    /// The map's opening view: high above the south edge, looking at the
    /// plane's centre.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 400.0, 400.0), Vec3::ZERO, 16.0 / 9.0, 50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_ahead_follows_view_direction() {
        let cam = Camera::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO, 1.0, 45.0);
        assert_eq!(cam.forward(), Vec3::NEG_Z);
        assert_eq!(cam.look_ahead(), Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn degenerate_direction_falls_back() {
        let cam = Camera::new(Vec3::ONE, Vec3::ONE, 1.0, 45.0);
        assert_eq!(cam.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn target_projects_to_screen_centre() {
        let cam = Camera::default();
        let clip = cam.build_matrix() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }
}
