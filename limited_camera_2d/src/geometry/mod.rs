//! Geometry module: world-space rectangles and grid subdivision.

mod grid;
mod rect;

pub use grid::{grid_cell, grid_cell_count};
pub use rect::Rect;
