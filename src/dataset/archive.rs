//! Fixed-size binary tile batch decoding
//!
//! A batch file is a plain concatenation of 3073-byte records, each one
//! tag byte followed by three row-major color planes (R, then G, then B)
//! of a 32×32 tile. The tag byte labels the record's class in the source
//! distribution and is irrelevant to matching, so it is skipped.

use crate::dataset::tiles::TileDataset;
use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, RgbImage};
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

/// Native edge length of archived tiles in pixels
pub const ARCHIVE_TILE_EDGE: u32 = 32;
/// File extension that marks a dataset directory as archived batches
pub const ARCHIVE_EXTENSION: &str = "bin";

/// Bytes per color plane within one record
const PLANE_BYTES: usize = (ARCHIVE_TILE_EDGE * ARCHIVE_TILE_EDGE) as usize;
/// Bytes per record: one tag byte plus three color planes
const RECORD_BYTES: usize = 1 + 3 * PLANE_BYTES;

/// Batch files under `dir`, sorted by name for a stable tile order
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be read.
pub fn batch_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();

        if path.extension().and_then(|ext| ext.to_str()) == Some(ARCHIVE_EXTENSION) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Decode batch files into one dataset, concatenated in file order
///
/// Tiles land at their native 32×32 unless `tile_size` differs, in which
/// case they go through the same resize path as loose images. A trailing
/// partial record in a batch is dropped silently, like any other
/// malformed dataset entry. The optional bar ticks once per batch file.
///
/// # Errors
///
/// Returns `FileSystem` if a batch file cannot be read.
pub fn load_batches(
    files: &[PathBuf],
    tile_size: (u32, u32),
    progress: Option<&ProgressBar>,
) -> Result<TileDataset> {
    let mut images = Vec::new();

    for path in files {
        let bytes = fs::read(path).map_err(|e| MosaicError::FileSystem {
            path: path.clone(),
            operation: "read batch",
            source: e,
        })?;

        images.extend(decode_batch(&bytes).into_iter().map(DynamicImage::ImageRgb8));

        if let Some(bar) = progress {
            bar.inc(1);
        }
    }

    Ok(TileDataset::from_images(images, tile_size))
}

/// Split a batch into records and decode each to an RGB tile
fn decode_batch(bytes: &[u8]) -> Vec<RgbImage> {
    bytes
        .chunks_exact(RECORD_BYTES)
        .filter_map(decode_record)
        .collect()
}

/// Interleave one record's planar channels into an RGB tile
fn decode_record(record: &[u8]) -> Option<RgbImage> {
    let planes = record.get(1..)?;

    let mut tile = RgbImage::new(ARCHIVE_TILE_EDGE, ARCHIVE_TILE_EDGE);
    for (i, pixel) in tile.pixels_mut().enumerate() {
        pixel.0 = [
            *planes.get(i)?,
            *planes.get(PLANE_BYTES + i)?,
            *planes.get(2 * PLANE_BYTES + i)?,
        ];
    }

    Some(tile)
}
