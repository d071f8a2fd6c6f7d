use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraController, OrbitRig};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, fly-to and orbit parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position of the opening view.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Fly-to progress per second.
    #[schemars(title = "Flight Speed", range(min = 0.05, max = 2.0), extend("step" = 0.01))]
    pub speed: f32,
    /// Offset scale applied when zooming to a selected venue.
    #[schemars(title = "See More Zoom", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub see_more_zoom: f32,
    /// Closest orbit distance.
    #[schemars(title = "Min Distance", range(min = 10.0, max = 800.0), extend("step" = 10.0))]
    pub min_distance: f32,
    /// Farthest orbit distance.
    #[schemars(title = "Max Distance", range(min = 100.0, max = 2000.0), extend("step" = 10.0))]
    pub max_distance: f32,
    /// Largest polar angle in radians.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Seconds between a completed see-more flight and navigation.
    #[schemars(title = "Navigation Delay", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub navigation_delay: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 2000.0,
            start_position: [0.0, 400.0, 400.0],
            speed: 0.33,
            see_more_zoom: 0.3,
            min_distance: 200.0,
            max_distance: 800.0,
            max_polar_angle: FRAC_PI_2,
            navigation_delay: 0.18,
        }
    }
}

impl CameraOptions {
    /// Opening camera for a viewport aspect ratio.
    #[must_use]
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            znear: self.znear,
            zfar: self.zfar,
            ..Camera::new(
                Vec3::from_array(self.start_position),
                Vec3::ZERO,
                aspect,
                self.fovy,
            )
        }
    }

    /// Orbit rig around the plane's centre with these limits.
    #[must_use]
    pub fn orbit_rig(&self) -> OrbitRig {
        OrbitRig {
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            max_polar_angle: self.max_polar_angle,
            ..OrbitRig::new(Vec3::ZERO)
        }
    }

    /// Idle fly-to controller at this speed.
    #[must_use]
    pub fn controller(&self) -> CameraController {
        CameraController::new(self.speed)
    }
}
