//! Controller module: keyboard input mapped onto camera moves and limit modes.
//!
//! Reproduces the classic limit demo: free camera, whole-world limits, and
//! rotating grid cells as limits.

mod config;
mod controller;
mod input;

pub use config::ControllerConfig;
pub use controller::{CameraController, LimitMode};
pub use input::ControlKeys;
