// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Data and animation core of an interactive 3D venue map.
//!
//! Venues come from a headless CMS (or a bundled fallback), are projected
//! onto a flat map plane, spread apart so markers never overlap, and shown
//! on a 3D scene the host renders. Selecting a venue flies the camera to it
//! before the site navigates to the venue's page.
//!
//! # Key entry points
//!
//! - [`projection::Bounds`] - geographic extent to map-plane projection
//! - [`layout::relax`] / [`layout::MarkerLayout`] - marker de-collision
//! - [`camera::CameraController`] - eased fly-to animation
//! - [`visual`] - flashlight and stroke-draw effect parameters and shaders
//! - [`cms`] - content fetch with fallbacks and background loading
//! - [`map::MapSession`] - selection and see-more flow of the map view
//! - [`view`] - view resolution for the map and venue pages
//! - [`options::Options`] - runtime configuration
//!
//! # Architecture
//!
//! Everything runs on the host's frame loop except content loading, which
//! happens once per page on a [`cms::VenueLoader`] worker thread whose
//! result is picked up by polling a [`cms::PendingLoad`]. GPU resources
//! belong to the host: the crate hands over `bytemuck` uniform blocks and
//! validated WGSL programs.

pub mod camera;
pub mod cms;
pub mod error;
pub mod layout;
pub mod map;
pub mod options;
pub mod projection;
pub mod util;
pub mod venue;
pub mod view;
pub mod visual;

pub use error::VenueAtlasError;
