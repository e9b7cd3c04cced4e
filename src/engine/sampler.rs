//! Source-frame downsampling and grid-shape derivation

use crate::io::error::{MosaicError, Result, computation_error, invalid_parameter};
use image::{Rgb, RgbImage};
use ndarray::Array2;

/// Downsampled grid of representative source colors, shape `(rows, cols)`
pub type BlockTemplate = Array2<Rgb<u8>>;

/// Derive the effective grid shape for a frame
///
/// With auto-resize off the requested shape is returned unchanged. With
/// it on, the column count is recomputed as `round(W * rows / H)` (at
/// least 1) while rows stay fixed, so the mosaic keeps the source aspect
/// ratio instead of stretching it.
pub fn derive_resolution(
    frame_width: u32,
    frame_height: u32,
    target_res: (usize, usize),
    auto_resize: bool,
) -> (usize, usize) {
    let (rows, cols) = target_res;
    if !auto_resize || frame_height == 0 {
        return (rows, cols);
    }

    let derived =
        (f64::from(frame_width) * rows as f64 / f64::from(frame_height)).round() as usize;
    (rows, derived.max(1))
}

/// Downsample a frame into one representative color per grid cell
///
/// Nearest-pixel sampling: cell `(i, j)` takes the pixel at row
/// `round(H / rows) * i`, column `round(W / cols) * j`, clamped to the
/// frame bounds. No averaging happens; the picked pixel stands for the
/// whole block.
///
/// # Errors
///
/// Returns `InvalidParameter` if the effective grid has zero rows or
/// columns, and `InvalidSourceData` if the frame has no pixels.
pub fn compute_grid(
    frame: &RgbImage,
    target_res: (usize, usize),
    auto_resize: bool,
) -> Result<BlockTemplate> {
    let (rows, cols) = derive_resolution(frame.width(), frame.height(), target_res, auto_resize);

    if rows == 0 {
        return Err(invalid_parameter(
            "rows",
            &rows,
            &"grid must have at least one row",
        ));
    }
    if cols == 0 {
        return Err(invalid_parameter(
            "cols",
            &cols,
            &"grid must have at least one column",
        ));
    }
    if frame.width() == 0 || frame.height() == 0 {
        return Err(MosaicError::InvalidSourceData {
            reason: format!(
                "source frame has no pixels ({}x{})",
                frame.width(),
                frame.height()
            ),
        });
    }

    let row_stride = (f64::from(frame.height()) / rows as f64).round() as u64;
    let col_stride = (f64::from(frame.width()) / cols as f64).round() as u64;
    let max_y = u64::from(frame.height() - 1);
    let max_x = u64::from(frame.width() - 1);

    let mut cells = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        let y = (row_stride * i as u64).min(max_y) as u32;
        for j in 0..cols {
            let x = (col_stride * j as u64).min(max_x) as u32;
            cells.push(*frame.get_pixel(x, y));
        }
    }

    Array2::from_shape_vec((rows, cols), cells)
        .map_err(|e| computation_error("block template construction", &e))
}
