//! Video metadata types.
//!
//! [`VideoMetadata`] is extracted once when a file is opened and cached for
//! the lifetime of the extractor. See
//! [`VideoExtractor::metadata`](crate::VideoExtractor::metadata) and
//! [`probe`](crate::probe).

use std::time::Duration;

/// Metadata for the selected video stream and its container.
///
/// # Example
///
/// ```no_run
/// use framepull::VideoExtractor;
///
/// let extractor = VideoExtractor::open("input.mp4").unwrap();
/// let metadata = extractor.metadata();
/// println!("{}x{} @ {} fps", metadata.width, metadata.height, metadata.frames_per_second);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Frame width in pixels, as reported by the decoder.
    pub width: u32,
    /// Frame height in pixels, as reported by the decoder.
    pub height: u32,
    /// Frames per second (may be approximate for variable-frame-rate
    /// content).
    pub frames_per_second: f64,
    /// Estimated total number of frames, computed from duration and frame
    /// rate. Zero when either is unknown.
    pub frame_count: u64,
    /// Codec name (e.g. `"h264"`, `"vp9"`, `"av1"`).
    pub codec: String,
    /// Container format name (e.g. `"mov,mp4,m4a,3gp,3g2,mj2"`, `"matroska,webm"`).
    pub format: String,
    /// Total duration of the media file.
    pub duration: Duration,
}
