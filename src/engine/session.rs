//! Session configuration and per-frame matching orchestration

use crate::dataset::tiles::TileDataset;
use crate::engine::assignment::{self, MatchMode};
use crate::engine::index::{Metric, SpatialIndex};
use crate::engine::{compositor, pipeline, sampler};
use crate::io::configuration::{FAST_CANDIDATES, UNIQUE_INITIAL_CANDIDATES};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};

/// Recognized session options
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Mosaic grid shape as `(rows, cols)`
    pub target_res: (usize, usize),
    /// Tile pixel size as `(width, height)`
    pub mosaic_size: (u32, u32),
    /// Tile selection strategy
    pub mode: MatchMode,
    /// Recompute columns from the source aspect ratio, per frame
    pub auto_resize: bool,
    /// Distance metric for signature matching
    pub metric: Metric,
    /// Seed for fast-mode selection; `None` draws a random base seed
    pub random_seed: Option<u64>,
}

impl SessionConfig {
    /// Reject configurations that cannot describe a mosaic
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero row count, a zero column
    /// count without auto-resize to derive one, or a zero tile dimension.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.target_res;
        if rows == 0 {
            return Err(invalid_parameter(
                "rows",
                &rows,
                &"grid must have at least one row",
            ));
        }
        if cols == 0 && !self.auto_resize {
            return Err(invalid_parameter(
                "cols",
                &cols,
                &"grid must have at least one column unless auto-resize derives it",
            ));
        }

        let (width, height) = self.mosaic_size;
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "mosaic_size",
                &format!("{width}x{height}"),
                &"tile dimensions must be positive",
            ));
        }

        Ok(())
    }
}

/// One matching session: owns the tile dataset and its spatial index
///
/// Construction validates the configuration; `prepare` builds the index
/// exactly once per dataset. Frames are then matched against the shared
/// read-only index, each with its own seeded random stream, so the
/// session never mutates between frames and can serve them in parallel.
pub struct MatchingSession {
    config: SessionConfig,
    seed: u64,
    prepared: Option<Prepared>,
    index_builds: usize,
}

struct Prepared {
    dataset: TileDataset,
    index: SpatialIndex,
}

impl MatchingSession {
    /// Validate the configuration and create an unprepared session
    ///
    /// # Errors
    ///
    /// Propagates the configuration validation failures of
    /// [`SessionConfig::validate`].
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.random_seed.unwrap_or_else(rand::random);

        Ok(Self {
            config,
            seed,
            prepared: None,
            index_builds: 0,
        })
    }

    /// Extract signatures and build the spatial index, readying the session
    ///
    /// Preparing again replaces the dataset and counts another build;
    /// within one prepared session the index is never rebuilt.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` if the dataset holds no tiles.
    pub fn prepare(&mut self, dataset: TileDataset) -> Result<()> {
        let index = SpatialIndex::build(&dataset, self.config.metric)?;
        self.prepared = Some(Prepared { dataset, index });
        self.index_builds += 1;
        Ok(())
    }

    /// Whether a dataset has been prepared and frames can be matched
    pub const fn is_ready(&self) -> bool {
        self.prepared.is_some()
    }

    /// Number of index builds this session has performed
    pub const fn index_builds(&self) -> usize {
        self.index_builds
    }

    /// The validated session configuration
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The prepared tile dataset, if any
    pub fn dataset(&self) -> Option<&TileDataset> {
        self.prepared.as_ref().map(|prepared| &prepared.dataset)
    }

    /// The built spatial index, if any
    pub fn index(&self) -> Option<&SpatialIndex> {
        self.prepared.as_ref().map(|prepared| &prepared.index)
    }

    /// Match one source frame into a composited mosaic
    ///
    /// `frame_index` offsets the session seed so every frame draws from
    /// its own deterministic random stream, independent of processing
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `NotReady` before `prepare`, and propagates sampling,
    /// assignment, and compositing failures.
    pub fn mosaic_frame(&self, frame: &RgbImage, frame_index: usize) -> Result<RgbImage> {
        let Some(prepared) = self.prepared.as_ref() else {
            return Err(MosaicError::NotReady {
                operation: "frame matching",
            });
        };

        let template =
            sampler::compute_grid(frame, self.config.target_res, self.config.auto_resize)?;

        let k0 = match self.config.mode {
            MatchMode::Fast => FAST_CANDIDATES,
            MatchMode::Unique => UNIQUE_INITIAL_CANDIDATES,
        };
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(frame_index as u64));

        let grid = assignment::assign(&template, &prepared.index, self.config.mode, k0, &mut rng)?;
        compositor::composite(&grid, &prepared.dataset)
    }

    /// Match a frame sequence in input order
    ///
    /// Convenience wrapper over [`pipeline::run_frames`] without progress
    /// reporting.
    ///
    /// # Errors
    ///
    /// Returns `NotReady` before `prepare`; otherwise the first per-frame
    /// failure.
    pub fn run_frames(&self, frames: &[RgbImage]) -> Result<Vec<RgbImage>> {
        pipeline::run_frames(self, frames, None)
    }
}
