//! Photomosaic engine matching image blocks to tile datasets with a k-d tree
//!
//! The system reduces every dataset tile to a mean-color signature, indexes
//! the signatures in a k-d tree, and rebuilds source images (or every frame
//! of a GIF animation) by assigning the nearest tiles to a grid of sampled
//! blocks.

#![forbid(unsafe_code)]

/// Tile dataset loading, normalization, and batch archive decoding
pub mod dataset;
/// Matching engine: signatures, spatial index, sampling, assignment, compositing
pub mod engine;
/// Input/output operations, CLI, progress reporting, and error handling
pub mod io;

pub use io::error::{MosaicError, Result};
