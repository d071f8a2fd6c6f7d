use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::relax::{MOVE_EPSILON, RELAX_ITERATIONS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Marker Layout", inline)]
#[serde(default)]
/// Marker spacing and relaxation budget.
pub struct LayoutOptions {
    /// Spacing in screen pixels, scaled into scene units by the viewport.
    #[schemars(title = "Marker Spacing", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub base_distance: f32,
    /// Scene width the spacing is measured against.
    #[schemars(skip)]
    pub world_width: f32,
    /// Smallest spacing in scene units, whatever the viewport.
    #[schemars(title = "Min Spacing", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub min_distance_floor: f32,
    /// Relaxation sweeps.
    #[schemars(title = "Iterations", range(min = 1, max = 32))]
    pub iterations: usize,
    /// Movement below which a marker counts as unmoved.
    #[schemars(skip)]
    pub epsilon: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            base_distance: 48.0,
            world_width: 600.0,
            min_distance_floor: 20.0,
            iterations: RELAX_ITERATIONS,
            epsilon: MOVE_EPSILON,
        }
    }
}
