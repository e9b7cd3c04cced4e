//! Dataset directory loading with archive auto-detection

use crate::dataset::archive;
use crate::dataset::tiles::TileDataset;
use crate::io::error::{MosaicError, Result};
use image::DynamicImage;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Image file extensions the directory loader accepts
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "ppm"];

/// Load a tile dataset from a directory
///
/// A directory holding `.bin` batch files is loaded through the archive
/// path; anything else is treated as a flat collection of image files,
/// decoded on the rayon pool in sorted filename order. Files that fail
/// to decode are dropped silently, like the channel filtering applied
/// afterwards. The optional bar has its length set once the file listing
/// is known and ticks once per file.
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be read and
/// `EmptyDataset` if no tile survives decoding and filtering.
pub fn load_dataset(
    dir: &Path,
    tile_size: (u32, u32),
    progress: Option<&ProgressBar>,
) -> Result<TileDataset> {
    let batches = archive::batch_files(dir)?;

    let dataset = if batches.is_empty() {
        let files = collect_image_files(dir)?;
        if let Some(bar) = progress {
            bar.set_length(files.len() as u64);
        }

        let images: Vec<DynamicImage> = files
            .par_iter()
            .filter_map(|path| {
                let decoded = image::open(path).ok();
                if let Some(bar) = progress {
                    bar.inc(1);
                }
                decoded
            })
            .collect();

        TileDataset::from_images(images, tile_size)
    } else {
        if let Some(bar) = progress {
            bar.set_length(batches.len() as u64);
        }
        archive::load_batches(&batches, tile_size, progress)?
    };

    if dataset.is_empty() {
        return Err(MosaicError::EmptyDataset {
            path: Some(dir.to_path_buf()),
        });
    }

    Ok(dataset)
}

/// Image files under `dir`, sorted by name for a stable tile order
fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
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

        if !path.is_file() {
            continue;
        }

        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if supported {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
