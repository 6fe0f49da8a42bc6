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

//! Quaternion-based 3D math and camera kinematics toolkit.
//!
//! Vantage provides the view-side core of a 3D visualization stack: a
//! fixed-precision linear-algebra library (vectors, 4x4 matrices,
//! quaternions, and conversions among four rotation representations),
//! a focus-locked orbital [`camera`], and a minimal [`scene`] layer
//! (node graph, lighting rig, shapes, keyframed models) built on the
//! same math.
//!
//! # Key entry points
//!
//! - [`camera::core::Camera`] - the camera state machine
//! - [`math::rotation::Rotation`] - the rotation abstraction
//! - [`scene::Scene`] - the scene graph stub
//! - [`options::Options`] - TOML view presets (camera, lighting)
//!
//! # Threading
//!
//! Every math type is an immutable value and freely shareable. The
//! [`camera::core::Camera`] and [`scene::Scene`] are plain mutable
//! state with no internal synchronization: confine each instance to a
//! single logical owner (typically the render/input thread) or wrap
//! it in a lock at the call boundary, not inside the math.

pub mod camera;
pub mod error;
pub mod math;
pub mod options;
pub mod scene;
