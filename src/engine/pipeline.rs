//! Ordered frame-sequence orchestration over a prepared session

use crate::engine::session::MatchingSession;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Match every source frame, preserving input order in the output
///
/// The session's lifecycle makes this the streaming phase: the dataset
/// and index were fixed by `prepare`, each frame owns its transient
/// template, assignment grid, and usage flags, and the collected outputs
/// are the finalized sequence. Frames are independent once the index
/// exists, so they are mapped on the rayon pool; collection restores
/// arrival order regardless of completion order. The optional bar ticks
/// once per completed frame.
///
/// # Errors
///
/// Returns `NotReady` if the session was never prepared; otherwise the
/// first per-frame failure, if any.
pub fn run_frames(
    session: &MatchingSession,
    frames: &[RgbImage],
    progress: Option<&ProgressBar>,
) -> Result<Vec<RgbImage>> {
    if !session.is_ready() {
        return Err(MosaicError::NotReady {
            operation: "frame streaming",
        });
    }

    frames
        .par_iter()
        .enumerate()
        .map(|(frame_index, frame)| {
            let output = session.mosaic_frame(frame, frame_index);
            if let Some(bar) = progress {
                bar.inc(1);
            }
            output
        })
        .collect()
}
