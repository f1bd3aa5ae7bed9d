/// Grid cells: split a region into `columns × rows` equal tiles.
///
/// Cells are indexed row-major: frame `f` is column `f % columns`,
/// row `f / columns`.

use glam::Vec2;
use crate::error::{log_and_return_error, Error, Result};
use super::Rect;

const SOURCE: &str = "camera2d::geometry";

/// Number of cells in a `columns × rows` grid.
pub fn grid_cell_count(columns: u32, rows: u32) -> u32 {
    columns.saturating_mul(rows)
}

/// Rectangle of cell `frame` when `region` is divided into `columns × rows` tiles.
///
/// # Errors
///
/// - `InvalidGrid` if `columns` or `rows` is zero
/// - `InvalidGrid` if `frame` is not smaller than `columns * rows`
pub fn grid_cell(region: &Rect, columns: u32, rows: u32, frame: u32) -> Result<Rect> {
    if columns == 0 || rows == 0 {
        return Err(log_and_return_error(SOURCE, Error::InvalidGrid(format!(
            "{}x{} grid has no cells", columns, rows
        ))));
    }

    let count = grid_cell_count(columns, rows);
    if frame >= count {
        return Err(log_and_return_error(SOURCE, Error::InvalidGrid(format!(
            "cell {} out of range for {}x{} grid ({} cells)", frame, columns, rows, count
        ))));
    }

    let tile = region.size() / Vec2::new(columns as f32, rows as f32);
    let x = (frame % columns) as f32;
    let y = (frame / columns) as f32;

    Ok(Rect::from_position_size(region.min() + Vec2::new(x, y) * tile, tile))
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
