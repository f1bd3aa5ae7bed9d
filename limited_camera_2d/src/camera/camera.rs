/// Camera: 2D view over a world that may be bounded by a limit rectangle.
///
/// Unlike a passive matrix holder, this camera owns its position/zoom and
/// keeps them valid: every setter stores the new value and immediately
/// re-runs `clamp::update()` against the current limits.

use glam::{Affine2, Mat4, Vec2, Vec3};
use crate::geometry::Rect;
use super::clamp;
use super::uniform::CameraUniform;

const SOURCE: &str = "camera2d::Camera";

/// 2D camera with optional world-space limits.
///
/// The camera is centered on `position`, magnified by `zoom`, and renders
/// into a viewport of `viewport_size` pixels. When limits are set, the
/// visible region stays inside them on every axis where it fits, and is
/// centered on them on every axis where it does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec2,
    zoom: f32,
    viewport_size: Vec2,
    limits: Option<Rect>,
}

impl Camera {
    /// Create a camera for a viewport of the given pixel size.
    ///
    /// Starts at the world origin with zoom 1.0 and no limits.
    /// Negative or NaN viewport dimensions are treated as zero.
    pub fn new(viewport_size: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport_size: viewport_size.max(Vec2::ZERO),
            limits: None,
        }
    }

    /// Create a camera from integer surface dimensions (e.g. a window's inner size).
    pub fn from_surface_size(width: u32, height: u32) -> Self {
        Self::new(Vec2::new(width as f32, height as f32))
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    /// Pixel coordinate of the viewport center.
    pub fn viewport_center(&self) -> Vec2 {
        self.viewport_size * 0.5
    }

    pub fn limits(&self) -> Option<&Rect> {
        self.limits.as_ref()
    }

    /// World-space rectangle currently shown on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_center_size(self.position, self.viewport_size / self.zoom)
    }

    // ===== SETTERS (store, then re-clamp) =====

    /// Move the camera center, then clamp it against the limits.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.reclamp();
    }

    /// Move the camera center by `delta` world units.
    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    /// Change the zoom, then re-clamp the position.
    ///
    /// Zero, negative and NaN values are floored to `MIN_ZOOM`; `+inf`
    /// becomes `MAX_ZOOM`. Any other positive zoom is stored as given.
    pub fn set_zoom(&mut self, zoom: f32) {
        let sanitized = clamp::sanitize_zoom(zoom);
        if zoom.is_nan() {
            crate::camera_warn!(SOURCE, "Zoom is NaN, using {}", sanitized);
        } else if sanitized != zoom {
            crate::camera_debug!(SOURCE, "Zoom {} out of range, using {}", zoom, sanitized);
        }

        self.zoom = sanitized;
        self.reclamp();
    }

    /// Set or clear the limit rectangle, then re-clamp zoom and position.
    pub fn set_limits(&mut self, limits: Option<Rect>) {
        match &limits {
            Some(rect) => crate::camera_debug!(
                SOURCE,
                "Limits set to {}x{} at ({}, {})",
                rect.size().x, rect.size().y, rect.position().x, rect.position().y
            ),
            None => crate::camera_debug!(SOURCE, "Limits cleared"),
        }

        self.limits = limits;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        let state = clamp::update(self.position, self.zoom, self.viewport_size, self.limits.as_ref());
        self.position = state.position;
        self.zoom = state.zoom;
    }

    // ===== VIEW TRANSFORM =====

    /// View matrix: world → viewport pixels.
    ///
    /// Translates `position` to the origin, scales by `zoom`, then moves the
    /// origin to the viewport center. `position` therefore lands on the
    /// center pixel. Z is left untouched.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.viewport_center().extend(0.0))
            * Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_translation((-self.position).extend(0.0))
    }

    /// Same transform as `view_matrix()`, as a 2D affine.
    pub fn view_transform(&self) -> Affine2 {
        Affine2::from_translation(self.viewport_center())
            * Affine2::from_scale(Vec2::splat(self.zoom))
            * Affine2::from_translation(-self.position)
    }

    /// Map a world-space point to viewport pixels.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.viewport_center()
    }

    /// Map a viewport pixel to world space.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport_center()) / self.zoom + self.position
    }

    /// GPU-ready snapshot of the view transform.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
