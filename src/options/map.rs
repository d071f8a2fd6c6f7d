use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::projection::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Map", inline)]
#[serde(default)]
/// Map plane extent and marker geometry.
pub struct MapOptions {
    /// Height of markers above the map plane.
    #[schemars(title = "Marker Elevation", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub marker_elevation: f32,
    /// Geographic extent and plane size.
    pub bounds: Bounds,
    /// Marker ring geometry.
    pub marker: MarkerOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            marker_elevation: 12.5,
            bounds: Bounds::CONTINENTAL_US,
            marker: MarkerOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Marker", inline)]
#[serde(default)]
/// Concentric ring radii and hover scale of a map marker.
pub struct MarkerOptions {
    /// Outer ring radius.
    #[schemars(skip)]
    pub outer_radius: f32,
    /// Middle ring radius.
    #[schemars(skip)]
    pub middle_radius: f32,
    /// Inner dot radius.
    #[schemars(skip)]
    pub inner_radius: f32,
    /// Invisible pick target radius.
    #[schemars(skip)]
    pub hit_radius: f32,
    /// Scale when neither hovered nor selected.
    #[schemars(title = "Idle Scale", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub idle_scale: f32,
    /// Scale when hovered or selected.
    #[schemars(title = "Active Scale", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub active_scale: f32,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            outer_radius: 13.0,
            middle_radius: 8.5,
            inner_radius: 4.5,
            hit_radius: 14.5,
            idle_scale: 0.8,
            active_scale: 0.95,
        }
    }
}

impl MarkerOptions {
    /// Marker scale for the given interaction state.
    #[must_use]
    pub fn scale(&self, active: bool) -> f32 {
        if active {
            self.active_scale
        } else {
            self.idle_scale
        }
    }
}
