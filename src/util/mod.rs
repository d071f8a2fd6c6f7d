//! Shared utilities.
//!
//! Easing curves for the camera and stroke-draw animations, and HTML
//! escaping for generated head tags.

pub mod easing;
pub mod html;
