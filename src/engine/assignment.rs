//! Block-to-tile assignment under fast and unique matching modes

use crate::engine::index::SpatialIndex;
use crate::engine::sampler::BlockTemplate;
use crate::engine::signature::Signature;
use crate::engine::usage::UsageFlags;
use crate::io::error::{MosaicError, Result, computation_error, invalid_parameter};
use image::Rgb;
use ndarray::Array2;
use rand::{Rng, rngs::StdRng};

/// Tile selection strategy, chosen once per session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Uniform random pick among the nearest candidates; tiles may repeat
    Fast,
    /// Nearest unused tile; no tile repeats within one frame
    Unique,
}

/// Per-cell tile indices into the dataset, shape `(rows, cols)`
pub type AssignmentGrid = Array2<usize>;

/// Assign one dataset tile index to every template cell
///
/// Cells are visited row-major in increasing index order. The order is
/// contractual: it fixes which cell wins a contested tile in unique mode
/// and makes fast mode reproducible under a fixed seed.
///
/// `k0` is the nearest-neighbor pool size in fast mode and the initial
/// scan width in unique mode, where the scan widens by the prior width on
/// every retry, capped at the tile count.
///
/// # Errors
///
/// Returns `InvalidParameter` when `k0` is zero, and `InsufficientTiles`
/// when unique mode is asked to fill more cells than the dataset holds.
pub fn assign(
    template: &BlockTemplate,
    index: &SpatialIndex,
    mode: MatchMode,
    k0: usize,
    rng: &mut StdRng,
) -> Result<AssignmentGrid> {
    if k0 == 0 {
        return Err(invalid_parameter(
            "k0",
            &k0,
            &"candidate count must be at least 1",
        ));
    }

    let (rows, cols) = template.dim();
    let cell_count = rows * cols;
    if mode == MatchMode::Unique && index.len() < cell_count {
        return Err(MosaicError::InsufficientTiles {
            tile_count: index.len(),
            required: cell_count,
        });
    }

    let mut used = UsageFlags::new(index.len());
    let mut choices = Vec::with_capacity(cell_count);

    for cell in template.iter() {
        let query = cell_signature(cell);
        let tile = match mode {
            MatchMode::Fast => select_fast(index, &query, k0, rng),
            MatchMode::Unique => {
                select_unique(index, &query, k0, &mut used).ok_or_else(|| {
                    computation_error(
                        "unique tile selection",
                        &"candidate scan exhausted the dataset",
                    )
                })?
            }
        };
        choices.push(tile);
    }

    Array2::from_shape_vec((rows, cols), choices)
        .map_err(|e| computation_error("assignment grid construction", &e))
}

/// Promote one sampled cell color to a query signature
fn cell_signature(cell: &Rgb<u8>) -> Signature {
    [
        f64::from(cell.0[0]),
        f64::from(cell.0[1]),
        f64::from(cell.0[2]),
    ]
}

/// Uniform random pick among the `k0` nearest candidates
fn select_fast(index: &SpatialIndex, query: &Signature, k0: usize, rng: &mut StdRng) -> usize {
    let candidates = index.nearest(query, k0);
    let pick = rng.random_range(0..candidates.len().max(1));
    candidates.get(pick).map_or(0, |neighbor| neighbor.tile)
}

/// Nearest unused candidate, scanning ever-wider neighbor lists
///
/// Each retry re-queries with the scan width grown by its prior value and
/// inspects only the suffix beyond the already-scanned prefix. The width
/// caps at the tile count, so the loop terminates even when every tile is
/// used; callers rule that out with the cell-count precondition.
fn select_unique(
    index: &SpatialIndex,
    query: &Signature,
    k0: usize,
    used: &mut UsageFlags,
) -> Option<usize> {
    let tile_count = index.len();
    let mut k = k0.clamp(1, tile_count);
    let mut scanned = 0usize;

    loop {
        let candidates = index.nearest(query, k);
        for hit in candidates.get(scanned..).unwrap_or(&[]) {
            if !used.is_used(hit.tile) {
                used.mark(hit.tile);
                return Some(hit.tile);
            }
        }

        if k >= tile_count {
            return None;
        }
        scanned = k;
        k = (k + k).min(tile_count);
    }
}
