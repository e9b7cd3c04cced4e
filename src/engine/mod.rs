//! Tile-matching engine
//!
//! This module contains the matching pipeline, leaf-first:
//! - Signature extraction and the spatial index over it
//! - Source-frame sampling into block templates
//! - Block-to-tile assignment and per-frame usage tracking
//! - Compositing and the ordered frame pipeline

/// Block-to-tile assignment under fast and unique matching modes
pub mod assignment;
/// Tile pasting into the full-resolution output buffer
pub mod compositor;
/// Nearest-neighbor index over tile signatures
pub mod index;
/// Ordered frame-sequence orchestration
pub mod pipeline;
/// Source-frame downsampling and grid-shape derivation
pub mod sampler;
/// Session configuration and per-frame matching state
pub mod session;
/// Mean-color feature extraction for dataset tiles
pub mod signature;
/// Per-frame tile usage tracking
pub mod usage;

pub use session::{MatchingSession, SessionConfig};
