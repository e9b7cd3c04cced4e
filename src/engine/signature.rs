//! Mean-color feature extraction for dataset tiles

use image::RgbImage;

/// Compact per-tile feature vector: mean R, G, B over all pixels
pub type Signature = [f64; 3];

/// Compute the mean-color signature of one decoded tile
///
/// Per-channel arithmetic mean over every pixel. A zero-area tile yields
/// the zero signature rather than dividing by zero; such tiles cannot be
/// produced by the dataset loaders, which enforce positive dimensions.
pub fn mean_color(tile: &RgbImage) -> Signature {
    if tile.width() == 0 || tile.height() == 0 {
        return [0.0; 3];
    }

    let mut sums = [0.0f64; 3];
    for pixel in tile.pixels() {
        sums[0] += f64::from(pixel.0[0]);
        sums[1] += f64::from(pixel.0[1]);
        sums[2] += f64::from(pixel.0[2]);
    }

    let pixel_count = f64::from(tile.width()) * f64::from(tile.height());
    [
        sums[0] / pixel_count,
        sums[1] / pixel_count,
        sums[2] / pixel_count,
    ]
}
