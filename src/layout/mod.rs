//! Marker layout on the map plane.
//!
//! Projected venue positions can coincide (two venues in one city) or sit
//! closer than a marker's on-screen size. The relaxation pass nudges them
//! apart with a spacing derived from the viewport width.

mod markers;
/// Fixed-budget pairwise repulsion.
pub mod relax;

pub use markers::MarkerLayout;
pub use relax::{min_distance_for_viewport, relax, Relaxation};
