//! Source and output image handling for stills and animations

use crate::io::configuration::GIF_FALLBACK_DELAY_MS;
use crate::io::error::{MosaicError, Result};
use image::codecs::gif::{GifDecoder, GifEncoder};
use image::{AnimationDecoder, Delay, DynamicImage, Frame, RgbImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decoded source media handed to the matching session
pub enum SourceMedia {
    /// A single still frame
    Still(RgbImage),
    /// An ordered animation frame sequence
    Animation {
        /// Frames in arrival order, normalized to 8-bit RGB
        frames: Vec<RgbImage>,
        /// Source delay of each frame, carried through to the output
        delays: Vec<Delay>,
    },
}

/// Whether a path names an animated source or output, by extension
pub fn is_animation_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
}

/// Decode one still source image to an 8-bit RGB buffer
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn load_source_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(decoded.to_rgb8())
}

/// Decode a source file as a still image or an animation
///
/// GIF sources decode to their full frame sequence with per-frame
/// delays; every other format decodes to a single still frame.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be opened, `ImageLoad` if
/// decoding fails, and `InvalidSourceData` if an animation holds no
/// frames.
pub fn load_source_media(path: &Path) -> Result<SourceMedia> {
    if !is_animation_path(path) {
        return Ok(SourceMedia::Still(load_source_image(path)?));
    }

    let file = File::open(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "open animation",
        source: e,
    })?;
    let decoder = GifDecoder::new(BufReader::new(file)).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let decoded = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| MosaicError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    if decoded.is_empty() {
        return Err(MosaicError::InvalidSourceData {
            reason: format!("animation '{}' holds no frames", path.display()),
        });
    }

    let mut frames = Vec::with_capacity(decoded.len());
    let mut delays = Vec::with_capacity(decoded.len());
    for frame in decoded {
        delays.push(frame.delay());
        frames.push(DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8());
    }

    Ok(SourceMedia::Animation { frames, delays })
}

/// Save one composited still image, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` if directories cannot be created and
/// `ImageExport` if encoding or writing fails.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    create_parent_dirs(path)?;

    image.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode composited frames as an animated GIF
///
/// Each frame carries its source delay; frames beyond the delay list
/// fall back to a fixed delay.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be created and `ImageExport`
/// if encoding fails.
pub fn save_animation(frames: &[RgbImage], delays: &[Delay], path: &Path) -> Result<()> {
    create_parent_dirs(path)?;

    let file = File::create(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let encoded = frames.iter().enumerate().map(|(index, frame)| {
        let delay = delays
            .get(index)
            .copied()
            .unwrap_or_else(|| Delay::from_numer_denom_ms(GIF_FALLBACK_DELAY_MS, 1));
        Frame::from_parts(
            DynamicImage::ImageRgb8(frame.clone()).to_rgba8(),
            0,
            0,
            delay,
        )
    });

    let mut encoder = GifEncoder::new(file);
    encoder
        .encode_frames(encoded)
        .map_err(|e| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    Ok(())
}
