/// Rect: axis-aligned world-space rectangle.
///
/// Stored as a top-left position plus a non-negative size, the same shape
/// as the limit rectangles handed to the camera.

use glam::Vec2;

/// Axis-aligned rectangle (position + size).
///
/// Width and height are never negative: fields are private and every
/// constructor normalizes inverted input, so `min() <= max()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Minimum corner
    position: Vec2,
    /// Width and height
    size: Vec2,
}

impl Rect {
    /// Create a rectangle from its minimum corner and size.
    ///
    /// A negative width or height flips the rectangle around `x`/`y`
    /// instead of producing an inverted rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_position_size(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Vector form of `new()`.
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self {
            position: position + size.min(Vec2::ZERO),
            size: size.abs(),
        }
    }

    /// Create a rectangle spanning two corners (in any order).
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self { position: min, size: max - min }
    }

    /// Create a rectangle centered on `center`.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self::from_min_max(center - half, center + half)
    }

    /// Minimum corner, same as `min()`.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn min(&self) -> Vec2 {
        self.position
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Test if a point lies inside this rectangle (edges included).
    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x
        && point.y >= min.y && point.y <= max.y
    }

    /// Test if this rectangle fully contains another rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        min.x <= other_min.x && max.x >= other_max.x
        && min.y <= other_min.y && max.y >= other_max.y
    }

    /// Test if the two rectangles overlap or touch.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        min.x <= other_max.x && max.x >= other_min.x
        && min.y <= other_max.y && max.y >= other_min.y
    }

    /// Overlapping region of two rectangles, or `None` if they are disjoint.
    ///
    /// Touching rectangles yield a zero-area rectangle.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        Some(Rect::from_min_max(min, max))
    }
}

#[cfg(test)]
#[path = "rect_tests.rs"]
mod tests;
