//! Per-frame tile usage tracking for unique-mode matching

use bitvec::prelude::*;

/// Fixed-size bit array marking tiles already placed in the current frame
///
/// Indices are 0-based dataset positions. One instance lives for exactly
/// one frame's assignment pass and is dropped with it, so a fresh frame
/// always starts with every flag clear.
#[derive(Clone, Debug)]
pub struct UsageFlags {
    bits: BitVec,
}

impl UsageFlags {
    /// Create flags for `tile_count` tiles, all unset
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Number of tracked tiles
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether no tiles are tracked at all
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Mark a tile as placed; out-of-range indices are ignored
    pub fn mark(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Test whether a tile was already placed this frame
    pub fn is_used(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Count tiles placed so far this frame
    pub fn used_count(&self) -> usize {
        self.bits.count_ones()
    }
}
