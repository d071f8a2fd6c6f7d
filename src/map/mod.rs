//! Map view state.
//!
//! [`MapSession`] ties the pipeline together for the map view: loaded
//! venues go through the marker layout, clicks drive the selection, and
//! "see more" runs the camera flight that ends in navigation to the venue
//! view. [`overlay`] holds the screen-space geometry of the selection card.

pub mod overlay;
mod session;

pub use overlay::{world_to_screen, LeaderLine, Segment};
pub use session::{LoadStatus, MapSession};
