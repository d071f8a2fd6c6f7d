//! Geographic → map-plane projection.
//!
//! A linear bounding-box mapping, not a true cartographic projection.
//! Distortion grows away from the middle of the continental US, which is the
//! only extent the map ever shows.

use glam::{Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed mapping between a lon/lat rectangle and a scene-unit rectangle
/// centred on the origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounds", inline)]
#[serde(default)]
pub struct Bounds {
    /// Western edge in degrees.
    #[schemars(skip)]
    pub min_lon: f64,
    /// Eastern edge in degrees.
    #[schemars(skip)]
    pub max_lon: f64,
    /// Southern edge in degrees.
    #[schemars(skip)]
    pub min_lat: f64,
    /// Northern edge in degrees.
    #[schemars(skip)]
    pub max_lat: f64,
    /// Scene width covered by the lon range.
    #[schemars(title = "Width", range(min = 100.0, max = 2000.0), extend("step" = 10.0))]
    pub width: f32,
    /// Scene height covered by the lat range.
    #[schemars(title = "Height", range(min = 100.0, max = 2000.0), extend("step" = 10.0))]
    pub height: f32,
}

impl Bounds {
    /// Continental US mapped onto a 600 x 400 plane.
    pub const CONTINENTAL_US: Bounds = Bounds {
        min_lon: -125.0,
        max_lon: -66.0,
        min_lat: 24.0,
        max_lat: 49.0,
        width: 600.0,
        height: 400.0,
    };

    /// Project a longitude/latitude pair onto the plane.
    ///
    /// `min_lon..max_lon` maps onto `[-width/2, width/2]` and
    /// `min_lat..max_lat` onto `[-height/2, height/2]`. Input is not
    /// validated: out-of-range coordinates land outside the plane and NaN
    /// propagates.
    #[must_use]
    pub fn project(&self, lon: f64, lat: f64) -> Vec2 {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let x = (lon - self.min_lon) / (self.max_lon - self.min_lon) * width
            - width / 2.0;
        let y = (lat - self.min_lat) / (self.max_lat - self.min_lat) * height
            - height / 2.0;
        Vec2::new(x as f32, y as f32)
    }

    /// Inverse of [`Bounds::project`], returning `(lon, lat)`.
    #[must_use]
    pub fn unproject(&self, point: Vec2) -> (f64, f64) {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let lon = (f64::from(point.x) + width / 2.0) / width
            * (self.max_lon - self.min_lon)
            + self.min_lon;
        let lat = (f64::from(point.y) + height / 2.0) / height
            * (self.max_lat - self.min_lat)
            + self.min_lat;
        (lon, lat)
    }

    /// Half width and half height of the plane.
    #[inline]
    #[must_use]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a planar position into `[-w/2, w/2] x [-h/2, h/2]`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        let half = self.half_extents();
        point.clamp(-half, half)
    }

    /// Whether a planar position lies on or inside the plane's edges.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.half_extents();
        point.x.abs() <= half.x && point.y.abs() <= half.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::CONTINENTAL_US
    }
}

/// Lift a map-plane position into world space.
///
/// The map group is rotated -90° about X, so plane `(x, y)` becomes world
/// `(x, elevation, -y)` with the plane lying on the XZ floor.
#[inline]
#[must_use]
pub fn planar_to_world(point: Vec2, elevation: f32) -> Vec3 {
    Vec3::new(point.x, elevation, -point.y)
}
