//! Nearest-neighbor index over tile signatures

use crate::dataset::tiles::TileDataset;
use crate::engine::signature::{self, Signature};
use crate::io::error::{MosaicError, Result};
use kiddo::ImmutableKdTree;
use kiddo::float::distance::{Manhattan, SquaredEuclidean};
use std::num::NonZeroUsize;

/// Distance metric for signature comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Straight-line distance (L2)
    Euclidean,
    /// Taxicab distance (L1)
    Manhattan,
}

/// One hit from a k-nearest-neighbor query
#[derive(Clone, Copy, Debug)]
pub struct Neighbor {
    /// Index of the matched tile within the dataset ordering
    pub tile: usize,
    /// Distance from the query signature under the index metric
    pub distance: f64,
}

/// Read-only k-d tree over all tile signatures
///
/// Built once per matching session and shared immutably across every
/// frame; queries never mutate the tree.
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, 3>,
    signatures: Vec<Signature>,
    metric: Metric,
}

impl SpatialIndex {
    /// Extract a signature per tile and build the k-d tree over them
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` if the dataset holds no tiles.
    pub fn build(dataset: &TileDataset, metric: Metric) -> Result<Self> {
        if dataset.is_empty() {
            return Err(MosaicError::EmptyDataset { path: None });
        }

        let signatures: Vec<Signature> = dataset
            .tiles()
            .iter()
            .map(signature::mean_color)
            .collect();
        let tree = ImmutableKdTree::new_from_slice(&signatures);

        Ok(Self {
            tree,
            signatures,
            metric,
        })
    }

    /// Number of indexed tiles
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether the index holds no tiles (never true for a built index)
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Metric the index was built with
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Signature of one indexed tile, in dataset order
    pub fn signature(&self, tile: usize) -> Option<&Signature> {
        self.signatures.get(tile)
    }

    /// The `min(k, len)` tiles nearest to `query`, sorted by
    /// non-decreasing distance under the configured metric
    ///
    /// Distances are reported in metric units (true Euclidean, not
    /// squared). A `k` of zero yields an empty result.
    pub fn nearest(&self, query: &Signature, k: usize) -> Vec<Neighbor> {
        let Some(count) = NonZeroUsize::new(k.min(self.len())) else {
            return Vec::new();
        };

        match self.metric {
            Metric::Euclidean => self
                .tree
                .nearest_n::<SquaredEuclidean>(query, count)
                .into_iter()
                .map(|hit| Neighbor {
                    tile: hit.item as usize,
                    distance: hit.distance.sqrt(),
                })
                .collect(),
            Metric::Manhattan => self
                .tree
                .nearest_n::<Manhattan>(query, count)
                .into_iter()
                .map(|hit| Neighbor {
                    tile: hit.item as usize,
                    distance: hit.distance,
                })
                .collect(),
        }
    }
}
