//! Progress reporting for dataset loading and frame matching

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static DATASET_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for the two long-running run stages
///
/// Dataset loading and frame matching each get one bar under a shared
/// `MultiProgress`. Bar handles are cheap clones, so the rayon workers
/// tick them directly.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    dataset_bar: Option<ProgressBar>,
    frame_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            dataset_bar: None,
            frame_bar: None,
        }
    }

    /// Add the dataset-loading bar and return a handle for workers
    ///
    /// The bar starts without a length; the loader sets one once its
    /// file listing is known.
    pub fn start_dataset(&mut self) -> ProgressBar {
        let bar = ProgressBar::new(0);
        bar.set_style(DATASET_STYLE.clone());
        bar.set_message("Loading tiles");
        let bar = self.multi_progress.add(bar);
        self.dataset_bar = Some(bar.clone());
        bar
    }

    /// Mark dataset loading as complete with the surviving tile count
    pub fn finish_dataset(&self, tile_count: usize) {
        if let Some(ref bar) = self.dataset_bar {
            bar.finish_with_message(format!("Loaded {tile_count} tiles"));
        }
    }

    /// Add the frame-matching bar over `frame_count` frames
    pub fn start_frames(&mut self, frame_count: usize) -> ProgressBar {
        let bar = ProgressBar::new(frame_count as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_message("Matching frames");
        let bar = self.multi_progress.add(bar);
        self.frame_bar = Some(bar.clone());
        bar
    }

    /// Mark frame matching as complete
    pub fn finish_frames(&self) {
        if let Some(ref bar) = self.frame_bar {
            bar.finish_with_message("Frames matched");
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
