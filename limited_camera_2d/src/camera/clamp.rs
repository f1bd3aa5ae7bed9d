/// Clamp: pure position/zoom correction against an optional limit rectangle.
///
/// Everything here is value-in/value-out. `Camera` calls `update()` after
/// each mutation, but owners that keep their own state can call it directly.
///
/// Invariant after `update()` with limits set, per axis independently:
/// - the visible span (`viewport_size / zoom`) lies inside the limits, or
/// - the visible span is at least as large as the limits and the camera
///   sits exactly on the limits' center.

use glam::Vec2;
use crate::geometry::Rect;

/// Smallest zoom the camera accepts. Zero, negative and NaN zooms are floored here.
pub const MIN_ZOOM: f32 = 1e-3;

/// Zoom stored in place of `+inf`. Finite zooms above it pass through.
pub const MAX_ZOOM: f32 = 1e6;

/// Camera position and zoom after sanitizing and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedState {
    /// World-space point at the center of the viewport
    pub position: Vec2,
    /// Magnification factor, finite and at least `MIN_ZOOM`
    pub zoom: f32,
}

/// Floor a requested zoom to `MIN_ZOOM` (NaN included) and map `+inf` to `MAX_ZOOM`.
pub fn sanitize_zoom(zoom: f32) -> f32 {
    if zoom.is_nan() || zoom < MIN_ZOOM {
        MIN_ZOOM
    } else if zoom == f32::INFINITY {
        MAX_ZOOM
    } else {
        zoom
    }
}

/// Half-width and half-height, in world units, of the region visible at `zoom`.
pub fn visible_half_extent(viewport_size: Vec2, zoom: f32) -> Vec2 {
    viewport_size / zoom * 0.5
}

/// One-dimensional clamp of a camera center.
///
/// `limit_min`/`limit_size` describe the limit span on this axis. When the
/// visible span (`2 * half_extent`) does not fit, the limit center is returned
/// regardless of `position`. Otherwise `position` is clamped into
/// `[limit_min + half_extent, limit_min + limit_size - half_extent]`.
pub fn clamp_axis(position: f32, half_extent: f32, limit_min: f32, limit_size: f32) -> f32 {
    if 2.0 * half_extent >= limit_size {
        return limit_min + limit_size * 0.5;
    }

    let low = limit_min + half_extent;
    let high = limit_min + limit_size - half_extent;
    // max/min rather than f32::clamp: a NaN position lands on `low` instead of panicking
    position.max(low).min(high)
}

/// Clamp a camera center against `limits`, each axis on its own.
pub fn clamp_position(position: Vec2, zoom: f32, viewport_size: Vec2, limits: &Rect) -> Vec2 {
    let half = visible_half_extent(viewport_size, zoom);
    let min = limits.min();
    let size = limits.size();

    Vec2::new(
        clamp_axis(position.x, half.x, min.x, size.x),
        clamp_axis(position.y, half.y, min.y, size.y),
    )
}

/// Sanitize `zoom`, then clamp `position` against `limits` (if any).
///
/// Without limits the position passes through untouched.
pub fn update(position: Vec2, zoom: f32, viewport_size: Vec2, limits: Option<&Rect>) -> ClampedState {
    let zoom = sanitize_zoom(zoom);
    let position = match limits {
        Some(limits) => clamp_position(position, zoom, viewport_size, limits),
        None => position,
    };

    ClampedState { position, zoom }
}

#[cfg(test)]
#[path = "clamp_tests.rs"]
mod tests;
