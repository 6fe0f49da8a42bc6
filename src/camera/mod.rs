//! Camera system for 3D scene viewing.
//!
//! Provides the focus-locked orbital camera, view/projection matrix
//! builders, and view-frustum extraction.

/// Core camera state machine and matrix builders.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;
