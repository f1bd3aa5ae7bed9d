/// Controller configuration

use crate::error::{log_and_return_error, Error, Result};
use crate::geometry::Rect;

const SOURCE: &str = "camera2d::ControllerConfig";

/// Tuning for `CameraController`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Pan speed in world units per second
    pub pan_speed: f32,
    /// Zoom change per second, relative to the current zoom
    pub zoom_rate: f32,
    /// Whole world region used by the Total mode and split by the grid modes
    pub world: Rect,
    /// Grid (columns, rows) used by the Coarse mode
    pub coarse_grid: (u32, u32),
    /// Grid (columns, rows) used by the Fine mode
    pub fine_grid: (u32, u32),
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pan_speed: 400.0,
            zoom_rate: 2.5,
            world: Rect::new(0.0, 0.0, 512.0, 512.0),
            coarse_grid: (4, 4),
            fine_grid: (16, 16),
        }
    }
}

impl ControllerConfig {
    /// Check every value before a controller is built from this config.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if a speed is non-positive or non-finite, the world
    /// region is empty, or a grid has zero columns/rows or more cells than a
    /// `u32` counter can index.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(log_and_return_error(SOURCE, Error::InvalidConfig(msg)));

        if !(self.pan_speed.is_finite() && self.pan_speed > 0.0) {
            return invalid(format!("pan_speed must be positive, got {}", self.pan_speed));
        }
        if !(self.zoom_rate.is_finite() && self.zoom_rate > 0.0) {
            return invalid(format!("zoom_rate must be positive, got {}", self.zoom_rate));
        }

        let size = self.world.size();
        if !(self.world.position().is_finite() && size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return invalid(format!("world region must be non-empty, got {:?}", self.world));
        }

        for (name, (columns, rows)) in [("coarse_grid", self.coarse_grid), ("fine_grid", self.fine_grid)] {
            if columns == 0 || rows == 0 {
                return invalid(format!("{} must have cells, got {}x{}", name, columns, rows));
            }
            if columns.checked_mul(rows).is_none() {
                return invalid(format!("{} has too many cells, got {}x{}", name, columns, rows));
            }
        }

        Ok(())
    }
}
