//! Camera model and the fly-to animation.
//!
//! [`CameraController`] eases the camera from its current view to a
//! [`CameraTarget`], driving an [`OrbitControls`] implementation when the
//! host has one attached.

/// Eased fly-to animation state machine.
pub mod controller;
/// Orbit control seam and the distance/polar-limited [`OrbitRig`].
pub mod controls;
/// Core camera struct.
pub mod core;
/// Fly-to target description.
pub mod target;

pub use controller::{
    CameraController, CameraEvent, CameraPose, CameraState, DEFAULT_SPEED,
};
pub use controls::{OrbitControls, OrbitRig};
pub use self::core::Camera;
pub use target::{CameraTarget, TargetVector};
