//! # framepull
//!
//! Pull decoded video frames from media files as packed RGB buffers.
//!
//! `framepull` opens a media container, locates its first video stream, and
//! decodes frames one at a time into a reusable RGB24 buffer, powered by
//! FFmpeg via the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next)
//! crate. It is built for vision pipelines that consume individual frames
//! rather than playing the video: each call to
//! [`read_frame`](VideoExtractor::read_frame) produces exactly one frame, in
//! presentation order, and all FFmpeg resources are released
//! deterministically when the extractor is dropped.
//!
//! ## Quick Start
//!
//! ### Read frames one at a time
//!
//! ```no_run
//! use framepull::VideoExtractor;
//!
//! let mut extractor = VideoExtractor::open("input.mp4").unwrap();
//! println!("{}x{}", extractor.width(), extractor.height());
//!
//! while let Some(frame) = extractor.read_frame().unwrap() {
//!     // Row-major RGB24, stride = width * 3. The buffer is reused, so
//!     // copy anything you need to keep past the next call.
//!     assert_eq!(frame.data().len(), (frame.width() * frame.height() * 3) as usize);
//! }
//! ```
//!
//! ### Iterate owned images
//!
//! ```no_run
//! use framepull::VideoExtractor;
//!
//! let mut extractor = VideoExtractor::open("input.mp4").unwrap();
//! for frame in extractor.frames() {
//!     let image = frame.unwrap();
//!     // `image` is an image::RgbImage, independent of the extractor.
//! }
//! ```
//!
//! ### Inspect a file without extracting
//!
//! ```no_run
//! use framepull::probe;
//!
//! let metadata = probe("input.mp4").unwrap();
//! println!("{} @ {:.2} fps", metadata.codec, metadata.frames_per_second);
//! ```
//!
//! ## Behavior
//!
//! - **Stream selection** — the first video stream in container order;
//!   packets from all other streams are skipped.
//! - **Output format** — packed RGB24, 3 bytes per pixel, stride = width × 3,
//!   converted with FFmpeg's software scaler. Output resolution is
//!   configurable via [`ExtractOptions`].
//! - **End of stream** — a normal signal, not an error: `read_frame` returns
//!   `Ok(None)`.
//! - **Resource handling** — the demuxer, decoder, and scratch buffers are
//!   owned by the extractor and torn down in reverse acquisition order on
//!   drop. A failure during open releases everything acquired so far.
//! - **Threading** — an extractor is single-threaded (`&mut self`), but
//!   distinct extractors are independent and can run on different threads.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system. See the
//! [README](https://github.com/skanderjeddi/framepull#installation) for
//! platform-specific instructions.

mod convert;
pub mod error;
pub mod extractor;
pub mod ffmpeg;
pub mod iterator;
pub mod metadata;
pub mod options;
pub mod probe;

pub use error::ExtractError;
pub use extractor::{RgbFrame, VideoExtractor};
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use iterator::Frames;
pub use metadata::VideoMetadata;
pub use options::ExtractOptions;
pub use probe::{probe, probe_many};
