//! Lightweight media file probing.
//!
//! [`probe`] extracts metadata from a media file without keeping the demuxer
//! open, which is useful for quickly inspecting many files without retaining
//! an FFmpeg input context per file. For extraction, use
//! [`VideoExtractor::open`](crate::VideoExtractor::open) instead.

use std::path::Path;

use crate::{error::ExtractError, extractor::VideoExtractor, metadata::VideoMetadata};

/// Probe a media file and return its video metadata.
///
/// Opens the file, extracts the metadata of the first video stream, and
/// immediately closes the demuxer. The returned [`VideoMetadata`] is owned
/// and fully independent of any file handle.
///
/// # Errors
///
/// The same failures as [`VideoExtractor::open`]: [`ExtractError::Open`],
/// [`ExtractError::NoVideoStream`], or [`ExtractError::UnsupportedCodec`].
///
/// # Example
///
/// ```no_run
/// use framepull::probe;
///
/// let metadata = probe("input.mp4")?;
/// println!("{}x{} @ {} fps", metadata.width, metadata.height, metadata.frames_per_second);
/// # Ok::<(), framepull::ExtractError>(())
/// ```
pub fn probe<P: AsRef<Path>>(path: P) -> Result<VideoMetadata, ExtractError> {
    let extractor = VideoExtractor::open(path)?;
    Ok(extractor.metadata().clone())
}

/// Probe multiple media files and return their metadata.
///
/// Files that cannot be probed produce an `Err` entry in the result vector
/// rather than aborting the entire batch.
pub fn probe_many<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<VideoMetadata, ExtractError>> {
    paths.iter().map(|path| probe(path)).collect()
}
