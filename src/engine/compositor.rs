//! Tile pasting into the full-resolution output buffer

use crate::dataset::tiles::TileDataset;
use crate::engine::assignment::AssignmentGrid;
use crate::io::error::{MosaicError, Result};
use image::{RgbImage, imageops};

/// Paste the chosen tile of every grid cell into a fresh output buffer
///
/// The buffer measures `(tile_w * cols, tile_h * rows)` pixels and the
/// tile for cell `(i, j)` lands at pixel offset `(j * tile_w, i * tile_h)`,
/// so columns map to x and rows to y.
///
/// # Errors
///
/// Returns `InvalidTileIndex` if a grid entry exceeds the dataset bounds.
/// The assignment engine guarantees valid entries; the check guards
/// callers that assemble grids by hand.
pub fn composite(grid: &AssignmentGrid, dataset: &TileDataset) -> Result<RgbImage> {
    let (rows, cols) = grid.dim();
    let tile_w = dataset.tile_width();
    let tile_h = dataset.tile_height();

    let mut output = RgbImage::new(cols as u32 * tile_w, rows as u32 * tile_h);

    for ((row, col), &tile_index) in grid.indexed_iter() {
        let tile = dataset
            .tile(tile_index)
            .ok_or(MosaicError::InvalidTileIndex {
                index: tile_index,
                max_tiles: dataset.len(),
            })?;

        let x = col as i64 * i64::from(tile_w);
        let y = row as i64 * i64::from(tile_h);
        imageops::replace(&mut output, tile, x, y);
    }

    Ok(output)
}
