//! Input/output collaborators around the matching engine
//!
//! The engine consumes and produces decoded pixel buffers only; this
//! module supplies everything around that contract:
//! - Command-line parsing and run orchestration
//! - Still and animated image decoding and encoding
//! - Error types, configuration defaults, and progress display

/// Command-line interface driving the full mosaic run
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias for mosaic operations
pub mod error;
/// Source and output image handling for stills and animations
pub mod image;
/// Progress reporting for dataset loading and frame matching
pub mod progress;
