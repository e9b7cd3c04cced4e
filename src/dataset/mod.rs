//! Tile dataset construction
//!
//! This module turns raw dataset inputs into the ordered, equal-size RGB
//! tile sequence the matching engine consumes:
//! - Normalized tile storage with channel filtering
//! - Fixed-size binary batch decoding
//! - Directory loading with archive auto-detection

/// Fixed-size binary tile batch decoding
pub mod archive;
/// Dataset directory loading with archive auto-detection
pub mod loader;
/// Fixed-size RGB tile storage
pub mod tiles;

pub use tiles::TileDataset;
