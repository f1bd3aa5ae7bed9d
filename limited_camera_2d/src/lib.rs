/*!
# Limited Camera 2D

A 2D camera for real-time rendering loops that can be confined to a
rectangular region of the world.

The camera tracks a world-space position and a zoom factor for a fixed-size
viewport, and produces the view matrix used to draw the scene. When a limit
rectangle is set, the visible area is kept inside it on every axis where it
fits, and centered on it on every axis where it does not.

## Architecture

- **Camera**: position/zoom/limits owner, re-clamped on every mutation
- **clamp**: the pure per-axis clamp used by the camera
- **Rect**: world-space rectangles and grid subdivision
- **CameraController**: keyboard-driven pan/zoom and limit mode switching
- **Log**: pluggable logger shared by the whole crate
*/

// Internal modules
mod error;
pub mod camera;
pub mod controller;
pub mod geometry;
pub mod log;

// Main camera2d namespace module
pub mod camera2d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::{Camera, CameraUniform, ClampedState, MAX_ZOOM, MIN_ZOOM};

    // Pure clamp functions
    pub mod clamp {
        pub use crate::camera::clamp::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Controller sub-module
    pub mod controller {
        pub use crate::controller::*;
    }

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, Log, LogEntry, LogSeverity, Logger};
    }
}

// Re-export math library at crate root
pub use glam;
