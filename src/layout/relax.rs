//! Pairwise repulsion relaxation of overlapping markers.
//!
//! A fixed iteration budget, not a convergence loop: dense clusters may keep
//! some residual overlap, and the cost stays `O(iterations * n²)`.

use std::sync::Arc;

use glam::Vec2;

use crate::projection::Bounds;
use crate::venue::VenuePoint;

/// Number of sweeps over all pairs.
pub const RELAX_ITERATIONS: usize = 8;

/// Points that moved less than this keep their original `Arc`.
pub const MOVE_EPSILON: f32 = 1e-3;

/// Below this distance two points count as coincident.
const COINCIDENT_EPSILON: f32 = 1e-6;

/// Relaxation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relaxation {
    /// Sweeps over all pairs.
    pub iterations: usize,
    /// Movement threshold for returning an input point unchanged.
    pub epsilon: f32,
}

impl Default for Relaxation {
    fn default() -> Self {
        Self {
            iterations: RELAX_ITERATIONS,
            epsilon: MOVE_EPSILON,
        }
    }
}

impl Relaxation {
    /// Push apart every pair of points closer than `min_distance`.
    ///
    /// Each point starts from its [`VenuePoint::display_position`]. For a
    /// pair `(a, b)` at distance `d < min_distance`, both move
    /// `(min_distance - d) / 2` along `b - a` (a backwards, b forwards) and
    /// are clamped to the plane. Coincident pairs use the direction
    /// `(cos s, sin s)` with `s = (i + 1) * (j + 3)` so the result is
    /// reproducible.
    ///
    /// Points that end up within `epsilon` of where they started are
    /// returned as the same `Arc` so callers can skip re-rendering them;
    /// moved points come back as new `Arc`s with `adjusted_position` set.
    #[must_use]
    pub fn run(
        &self,
        points: &[Arc<VenuePoint>],
        min_distance: f32,
        bounds: &Bounds,
    ) -> Vec<Arc<VenuePoint>> {
        let mut positions: Vec<Vec2> =
            points.iter().map(|p| p.display_position()).collect();

        if min_distance > 0.0 {
            for _ in 0..self.iterations {
                separate_pairs(&mut positions, min_distance, bounds);
            }
        }

        let mut moved = 0usize;
        let out = points
            .iter()
            .zip(&positions)
            .map(|(point, &pos)| {
                if pos.distance(point.display_position()) > self.epsilon {
                    moved += 1;
                    Arc::new(point.with_adjusted_position(pos))
                } else {
                    Arc::clone(point)
                }
            })
            .collect();
        log::debug!(
            "relaxed {} markers (min distance {min_distance:.2}), {moved} moved",
            points.len()
        );
        out
    }
}

/// One sweep over all unordered pairs.
fn separate_pairs(positions: &mut [Vec2], min_distance: f32, bounds: &Bounds) {
    let n = positions.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let delta = positions[j] - positions[i];
            let distance = delta.length();
            if distance >= min_distance {
                continue;
            }

            let direction = if distance > COINCIDENT_EPSILON {
                delta / distance
            } else {
                let seed = ((i + 1) * (j + 3)) as f32;
                Vec2::new(seed.cos(), seed.sin())
            };
            let push = direction * ((min_distance - distance) * 0.5);

            positions[i] = bounds.clamp(positions[i] - push);
            positions[j] = bounds.clamp(positions[j] + push);
        }
    }
}

/// [`Relaxation::run`] with the default budget.
#[must_use]
pub fn relax(
    points: &[Arc<VenuePoint>],
    min_distance: f32,
    bounds: &Bounds,
) -> Vec<Arc<VenuePoint>> {
    Relaxation::default().run(points, min_distance, bounds)
}

/// Minimum marker spacing in scene units for the current viewport.
///
/// Narrow viewports squeeze the plane into fewer pixels, so the spacing
/// grows as `base * world_width / viewport_width`, never below `floor`.
#[must_use]
pub fn min_distance_for_viewport(
    base: f32,
    world_width: f32,
    viewport_width: f32,
    floor: f32,
) -> f32 {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return floor;
    }
    (base * (world_width / viewport_width)).max(floor)
}
