//! Command-line interface for photomosaic generation from images and animations

use crate::dataset::loader::load_dataset;
use crate::engine::assignment::MatchMode;
use crate::engine::index::Metric;
use crate::engine::pipeline;
use crate::engine::{MatchingSession, SessionConfig};
use crate::io::configuration::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_SEED, DEFAULT_TILE_SIZE, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{SourceMedia, load_source_media, save_animation, save_image};
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Distance metrics exposed on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MetricChoice {
    /// Manhattan distance between mean-color signatures
    L1,
    /// Euclidean distance between mean-color signatures
    L2,
}

impl MetricChoice {
    /// Convert the parsed choice into the engine metric
    pub const fn to_metric(self) -> Metric {
        match self {
            Self::L1 => Metric::Manhattan,
            Self::L2 => Metric::Euclidean,
        }
    }
}

#[derive(Parser)]
#[command(name = "mosatile")]
#[command(
    author,
    version,
    about = "Rebuild an image or GIF animation as a mosaic of dataset tiles"
)]
/// Command-line arguments for the mosaic generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image or GIF animation to rebuild
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory of tile images or tile batch archives
    #[arg(short, long, value_name = "DIR")]
    pub dataset: PathBuf,

    /// Output path (defaults to the source path with a suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Mosaic grid height in tiles
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Mosaic grid width in tiles
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Use every tile at most once instead of randomized selection
    #[arg(short, long)]
    pub unique: bool,

    /// Distance metric for tile matching
    #[arg(short, long, value_enum, default_value = "l2")]
    pub metric: MetricChoice,

    /// Derive the column count from the source aspect ratio
    #[arg(short, long)]
    pub auto_resize: bool,

    /// Random seed for reproducible tile selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tile selection strategy implied by the flags
    pub const fn match_mode(&self) -> MatchMode {
        if self.unique {
            MatchMode::Unique
        } else {
            MatchMode::Fast
        }
    }

    /// Assemble the session configuration from the parsed arguments
    pub const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            target_res: (self.rows, self.cols),
            mosaic_size: (self.tile_size, self.tile_size),
            mode: self.match_mode(),
            auto_resize: self.auto_resize,
            metric: self.metric.to_metric(),
            random_seed: Some(self.seed),
        }
    }
}

/// Orchestrates a full mosaic run from dataset load to output export
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the mosaic described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset or source cannot be loaded, the
    /// configuration is invalid, matching fails, or the output cannot
    /// be written.
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();

        let dataset_bar = self
            .progress_manager
            .as_mut()
            .map(ProgressManager::start_dataset);
        let tile_edge = self.cli.tile_size;
        let dataset = load_dataset(
            &self.cli.dataset,
            (tile_edge, tile_edge),
            dataset_bar.as_ref(),
        )?;
        if let Some(ref pm) = self.progress_manager {
            pm.finish_dataset(dataset.len());
        }

        let mut session = MatchingSession::new(self.cli.session_config())?;
        session.prepare(dataset)?;

        let output_path = self.output_path();
        match load_source_media(&self.cli.source)? {
            SourceMedia::Still(frame) => {
                let mosaic = session.mosaic_frame(&frame, 0)?;
                save_image(&mosaic, &output_path)?;
            }
            SourceMedia::Animation { frames, delays } => {
                let frame_bar = self
                    .progress_manager
                    .as_mut()
                    .map(|pm| pm.start_frames(frames.len()));
                let outputs = pipeline::run_frames(&session, &frames, frame_bar.as_ref())?;
                if let Some(ref pm) = self.progress_manager {
                    pm.finish_frames();
                }
                save_animation(&outputs, &delays, &output_path)?;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        self.report_elapsed(&output_path, start_time.elapsed());

        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        let stem = self.cli.source.file_stem().unwrap_or_default();
        let extension = self.cli.source.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = self.cli.source.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    fn report_elapsed(&self, path: &Path, elapsed: Duration) {
        if !self.cli.quiet {
            eprintln!(
                "Mosaic written to {} in {:.2}s",
                path.display(),
                elapsed.as_secs_f64()
            );
        }
    }
}
