//! Fixed-size RGB tile storage

use image::{DynamicImage, RgbImage, imageops::FilterType};
use rayon::prelude::*;

/// Ordered, immutable collection of equal-size RGB tiles
///
/// Every tile measures exactly `tile_width × tile_height` pixels and
/// carries exactly three channels; both invariants hold by construction.
/// A dataset is built once at session start and never mutated.
pub struct TileDataset {
    tiles: Vec<RgbImage>,
    tile_width: u32,
    tile_height: u32,
}

impl TileDataset {
    /// Build a dataset from decoded images
    ///
    /// Applies the channel filtering policy: images without color
    /// channels (grayscale, luma-alpha) are dropped silently rather than
    /// reported, since atypical dataset entries are expected. Alpha is
    /// stripped from the survivors, which are then center-crop resized to
    /// `tile_size` with Lanczos3 unless they already match it exactly.
    /// Normalization runs on the rayon pool; input order is preserved.
    pub fn from_images<I>(images: I, tile_size: (u32, u32)) -> Self
    where
        I: IntoIterator<Item = DynamicImage>,
    {
        let (width, height) = tile_size;
        let images: Vec<DynamicImage> = images.into_iter().collect();
        let tiles = images
            .into_par_iter()
            .filter(|image| image.color().has_color())
            .map(|image| normalize_tile(&image, width, height))
            .collect();

        Self {
            tiles,
            tile_width: width,
            tile_height: height,
        }
    }

    /// Number of tiles in the dataset
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether filtering left no tiles at all
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// One tile by dataset index
    pub fn tile(&self, index: usize) -> Option<&RgbImage> {
        self.tiles.get(index)
    }

    /// All tiles in dataset order
    pub fn tiles(&self) -> &[RgbImage] {
        &self.tiles
    }

    /// Tile width in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Tile height in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }
}

/// Strip alpha and force the exact tile size
fn normalize_tile(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    if image.width() == width && image.height() == height {
        return image.to_rgb8();
    }

    image
        .resize_to_fill(width, height, FilterType::Lanczos3)
        .to_rgb8()
}
