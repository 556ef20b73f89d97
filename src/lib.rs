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

//! Third-person orbit camera rig with occlusion handling.
//!
//! The rig keeps a camera orbiting a moving focus point. Player input swings
//! and zooms it; a subject on the move drags it back behind its heading.
//! Every tick an occlusion resolver keeps level geometry from hiding the
//! focus before critically-damped filters smooth the resulting pose.
//!
//! # Key entry points
//!
//! - [`OrbitRig`] - the rig; call [`OrbitRig::tick`] once per frame
//! - [`FocusTarget`] / [`AdvanceDetector`] - what the rig follows
//! - [`InputSample`] - per-tick look, zoom and advancing input
//! - [`GeometryQuery`] - the line-of-sight seam into the world, with
//!   [`StaticScene`] as a small built-in implementation
//! - [`options::Options`] - every tunable, loadable from TOML presets
//! - [`occlusion`] - the clip-plane and whisker resolvers
//!
//! # Tick order
//!
//! Input is folded into yaw, pitch and zoom first; the resolver then
//! adjusts distance (and, for whiskers, yaw) against the geometry; distance
//! and position are smoothed last and the camera is re-aimed at the focus.
//! Ticks without a focus leave the rig untouched.

pub mod camera;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod occlusion;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraUniform, InputSample, OrbitRig, OrbitState};
pub use error::RigError;
pub use focus::{AdvanceDetector, FocusTarget};
pub use geometry::{GeometryQuery, Hit, NoGeometry, StaticScene};
pub use occlusion::{OcclusionResolver, Resolution};
pub use options::{OcclusionStrategy, Options};
