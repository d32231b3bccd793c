//! Error types for the `framepull` crate.
//!
//! This module defines [`ExtractError`], the unified error type returned by
//! all fallible operations in the crate. Each variant corresponds to one
//! failure kind, so callers can match on the cause without string parsing.
//!
//! End of stream is deliberately not an error: [`read_frame`] returns
//! `Ok(None)` when the container is exhausted.
//!
//! [`read_frame`]: crate::VideoExtractor::read_frame

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for all `framepull` operations.
///
/// Every public method that can fail returns `Result<T, ExtractError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The media file could not be opened or its container format was not
    /// recognised.
    #[error("Failed to open media file at {path}: {reason}")]
    Open {
        /// Path that was passed to [`crate::VideoExtractor::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// No decoder is available for the stream's codec, or decoder setup
    /// failed.
    #[error("Cannot decode video stream: {codec}")]
    UnsupportedCodec {
        /// Codec name (or setup failure detail) for the rejected stream.
        codec: String,
    },

    /// The output pixel buffer could not be sized or allocated.
    #[error("Cannot allocate a {width}x{height} RGB pixel buffer")]
    Allocation {
        /// Requested output width in pixels.
        width: u32,
        /// Requested output height in pixels.
        height: u32,
    },

    /// The decoder rejected compressed data as corrupt, or the demuxer
    /// failed to read the container mid-stream.
    #[error("Failed to decode video frame: {0}")]
    Decode(String),

    /// Pixel-format conversion failed. This should not happen for a
    /// correctly initialised extractor and indicates an internal
    /// inconsistency rather than bad input.
    #[error("Pixel format conversion failed: {0}")]
    Conversion(String),
}
