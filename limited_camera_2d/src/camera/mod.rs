//! Camera module: 2D camera, limit clamping, and GPU uniform layout.
//!
//! The camera is a plain value owned by the caller. It has no error
//! paths: zoom is floored, positions are clamped against the limits.

mod camera;
pub mod clamp;
mod uniform;

pub use camera::Camera;
pub use clamp::{ClampedState, MAX_ZOOM, MIN_ZOOM};
pub use uniform::CameraUniform;
