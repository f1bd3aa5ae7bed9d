/// CameraController: keyboard-driven camera updates and limit modes.
///
/// Headless: the host forwards key events and frame times, the controller
/// mutates a caller-owned `Camera`. Arrows pan, PageUp/PageDown zoom,
/// A/S/D/F switch the limit mode.

use glam::Vec2;
use winit::event::ElementState;
use winit::keyboard::PhysicalKey;
use crate::camera::Camera;
use crate::error::Result;
use crate::geometry::{grid_cell, grid_cell_count, Rect};
use super::config::ControllerConfig;
use super::input::ControlKeys;

const SOURCE: &str = "camera2d::Controller";

/// Which limit rectangle the controller applies to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitMode {
    /// No limits
    #[default]
    Unbound,
    /// The whole world region
    Total,
    /// One cell of the coarse grid
    Coarse,
    /// One cell of the fine grid
    Fine,
}

impl LimitMode {
    fn from_control(control: ControlKeys) -> Option<Self> {
        if control == ControlKeys::MODE_UNBOUND {
            Some(LimitMode::Unbound)
        } else if control == ControlKeys::MODE_TOTAL {
            Some(LimitMode::Total)
        } else if control == ControlKeys::MODE_COARSE {
            Some(LimitMode::Coarse)
        } else if control == ControlKeys::MODE_FINE {
            Some(LimitMode::Fine)
        } else {
            None
        }
    }
}

/// Drives a `Camera` from keyboard input.
#[derive(Debug, Clone)]
pub struct CameraController {
    config: ControllerConfig,
    held: ControlKeys,
    mode: LimitMode,
    /// Next coarse cell to show
    coarse_counter: u32,
    /// Next fine cell to show
    fine_counter: u32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_valid_config(ControllerConfig::default())
    }
}

impl CameraController {
    /// Create a controller after validating `config`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the configuration is rejected by `ControllerConfig::validate()`.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ControllerConfig) -> Self {
        Self {
            config,
            held: ControlKeys::empty(),
            mode: LimitMode::Unbound,
            coarse_counter: 0,
            fine_counter: 0,
        }
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn mode(&self) -> LimitMode {
        self.mode
    }

    /// Keys currently held down.
    pub fn held(&self) -> ControlKeys {
        self.held
    }

    /// Index of the coarse cell the next Coarse switch will select.
    pub fn coarse_counter(&self) -> u32 {
        self.coarse_counter
    }

    /// Index of the fine cell the next Fine switch will select.
    pub fn fine_counter(&self) -> u32 {
        self.fine_counter
    }

    // ===== INPUT =====

    /// Feed a key event.
    ///
    /// Pan/zoom keys are remembered until released and applied by `update()`.
    /// Mode keys act once per press: auto-repeat while held is ignored.
    pub fn handle_key(&mut self, camera: &mut Camera, key: PhysicalKey, state: ElementState) -> Result<()> {
        let Some(control) = ControlKeys::from_physical_key(key) else {
            return Ok(());
        };

        if !state.is_pressed() {
            self.held.remove(control);
            return Ok(());
        }

        let was_held = self.held.contains(control);
        self.held.insert(control);

        if was_held {
            return Ok(());
        }

        crate::camera_trace!(SOURCE, "{:?} pressed", control);

        match LimitMode::from_control(control) {
            Some(mode) => self.select_mode(camera, mode),
            None => Ok(()),
        }
    }

    /// Release every held key (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        self.held = ControlKeys::empty();
    }

    // ===== FRAME UPDATE =====

    /// Apply held pan/zoom keys for a frame lasting `dt` seconds.
    pub fn update(&self, camera: &mut Camera, dt: f32) {
        let step = self.config.pan_speed * dt;

        if self.held.contains(ControlKeys::PAN_RIGHT) {
            camera.translate(Vec2::new(step, 0.0));
        }
        if self.held.contains(ControlKeys::PAN_LEFT) {
            camera.translate(Vec2::new(-step, 0.0));
        }
        if self.held.contains(ControlKeys::PAN_DOWN) {
            camera.translate(Vec2::new(0.0, step));
        }
        if self.held.contains(ControlKeys::PAN_UP) {
            camera.translate(Vec2::new(0.0, -step));
        }

        if self.held.contains(ControlKeys::ZOOM_IN) {
            camera.set_zoom(camera.zoom() + self.config.zoom_rate * dt * camera.zoom());
        }
        if self.held.contains(ControlKeys::ZOOM_OUT) {
            camera.set_zoom(camera.zoom() - self.config.zoom_rate * dt * camera.zoom());
        }
    }

    // ===== MODES =====

    /// Switch to `mode`: set its limits, then reset the camera to zoom 1 at the origin.
    ///
    /// Grid modes show the cell at their counter, then advance the counter
    /// (wrapping after the last cell).
    pub fn select_mode(&mut self, camera: &mut Camera, mode: LimitMode) -> Result<()> {
        let limits = match mode {
            LimitMode::Unbound => None,
            LimitMode::Total => Some(self.config.world),
            LimitMode::Coarse => {
                let cell = self.next_cell(self.config.coarse_grid, self.coarse_counter)?;
                self.coarse_counter = cell.1;
                Some(cell.0)
            }
            LimitMode::Fine => {
                let cell = self.next_cell(self.config.fine_grid, self.fine_counter)?;
                self.fine_counter = cell.1;
                Some(cell.0)
            }
        };

        camera.set_limits(limits);
        camera.set_zoom(1.0);
        camera.set_position(Vec2::ZERO);
        self.mode = mode;

        crate::camera_info!(SOURCE, "{}", self.status_text());
        Ok(())
    }

    /// Cell `counter` of `grid`, and the counter value that follows it.
    fn next_cell(&self, grid: (u32, u32), counter: u32) -> Result<(Rect, u32)> {
        let (columns, rows) = grid;
        let cell = grid_cell(&self.config.world, columns, rows, counter)?;
        let next = (counter + 1) % grid_cell_count(columns, rows);
        Ok((cell, next))
    }

    // ===== TEXT =====

    /// One-line description of the current mode.
    pub fn status_text(&self) -> String {
        match self.mode {
            LimitMode::Unbound => "Mode: Free camera".to_string(),
            LimitMode::Total => {
                let size = self.config.world.size();
                format!("Mode: Limit camera to {}x{} region", size.x, size.y)
            }
            LimitMode::Coarse => {
                let (width, height) = self.tile_size(self.config.coarse_grid);
                format!("Mode: Limit camera to {}x{} regions ({})", width, height, self.coarse_counter)
            }
            LimitMode::Fine => {
                let (width, height) = self.tile_size(self.config.fine_grid);
                format!("Mode: Limit camera to {}x{} regions ({})", width, height, self.fine_counter)
            }
        }
    }

    /// Key reminder shown alongside the status line.
    pub fn help_text(&self) -> &'static str {
        "Keys: A/S/D/F = Change Modes"
    }

    /// Whole-unit tile size for display; uneven worlds round down.
    fn tile_size(&self, (columns, rows): (u32, u32)) -> (u32, u32) {
        let size = self.config.world.size();
        (size.x as u32 / columns, size.y as u32 / rows)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
