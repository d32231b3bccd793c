//! The frame-extraction pipeline.
//!
//! [`VideoExtractor`] opens a media container, locates its first video
//! stream, and decodes frames one at a time into a reusable packed-RGB
//! buffer. Decoding is pull-based: each call to
//! [`read_frame`](VideoExtractor::read_frame) demuxes just enough packets to
//! produce the next displayable frame.
//!
//! # Example
//!
//! ```no_run
//! use framepull::VideoExtractor;
//!
//! let mut extractor = VideoExtractor::open("input.mp4")?;
//! while let Some(frame) = extractor.read_frame()? {
//!     // `frame.data()` is row-major RGB24, valid until the next call.
//!     process(frame.data(), frame.width(), frame.height());
//! }
//! # fn process(_: &[u8], _: u32, _: u32) {}
//! # Ok::<(), framepull::ExtractError>(())
//! ```

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{
    Error as FfmpegError, Packet, Rational,
    codec::context::Context as CodecContext,
    decoder::Video as VideoDecoder,
    format::{Pixel, context::Input},
    frame::Video as VideoFrame,
    media::Type,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::RgbImage;

use crate::{
    convert, error::ExtractError, iterator::Frames, metadata::VideoMetadata,
    options::ExtractOptions,
};

/// A single opened, decodable video.
///
/// Owns the demuxer, the decoder for the selected stream, and the scratch
/// buffers frames are decoded and converted into. Created via
/// [`open`](VideoExtractor::open); frames are pulled with
/// [`read_frame`](VideoExtractor::read_frame) or iterated with
/// [`frames`](VideoExtractor::frames).
///
/// Dropping the extractor (or calling [`close`](VideoExtractor::close))
/// releases everything. Each extractor is fully self-contained: distinct
/// extractors can run concurrently on different threads.
pub struct VideoExtractor {
    // Fields drop in declaration order: scratch buffers first, then the
    // converter and decoder, and the demuxer last.
    /// Scratch frame the decoder writes into; overwritten on each read.
    decoded: VideoFrame,
    /// Scratch frame the scaler writes RGB24 output into.
    converted: VideoFrame,
    /// The stable caller-visible pixel buffer (width × height × 3 bytes).
    pixels: Vec<u8>,
    /// Pixel-format converter (source format → RGB24).
    scaler: ScalingContext,
    /// Decoder for the selected video stream.
    decoder: VideoDecoder,
    /// The opened FFmpeg input (demuxer) context.
    input: Input,
    /// Index of the selected video stream, fixed at open time.
    stream_index: usize,
    /// Time base of the selected stream.
    time_base: Rational,
    /// Output frame width in pixels, fixed at open time.
    width: u32,
    /// Output frame height in pixels, fixed at open time.
    height: u32,
    /// Cached metadata extracted at open time.
    metadata: VideoMetadata,
    /// Path to the opened media file (kept for diagnostics).
    path: PathBuf,
    /// Whether the demuxer hit end of input and the decoder was switched to
    /// drain mode.
    eof_sent: bool,
    /// Whether the decoder has been fully drained.
    finished: bool,
}

impl Debug for VideoExtractor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VideoExtractor")
            .field("path", &self.path)
            .field("stream_index", &self.stream_index)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("metadata", &self.metadata)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl VideoExtractor {
    /// Open a media file for frame extraction at the source resolution.
    ///
    /// Equivalent to [`open_with_options`](VideoExtractor::open_with_options)
    /// with default options.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Open`] if the path does not exist or the container
    ///   format is not recognised.
    /// - [`ExtractError::NoVideoStream`] if the container has no video
    ///   stream.
    /// - [`ExtractError::UnsupportedCodec`] if no decoder is available for
    ///   the stream or decoder setup fails.
    /// - [`ExtractError::Allocation`] if the pixel buffer cannot be sized.
    ///
    /// On any failure, every resource acquired up to that point is released
    /// before the error is returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use framepull::VideoExtractor;
    ///
    /// let extractor = VideoExtractor::open("video.mp4")?;
    /// # Ok::<(), framepull::ExtractError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a media file for frame extraction with explicit output options.
    ///
    /// The selected stream is the **first** video stream in container order.
    /// Output dimensions are resolved from `options` against the
    /// decoder-reported source size; the pixel format is always packed
    /// RGB24.
    ///
    /// # Errors
    ///
    /// See [`open`](VideoExtractor::open).
    pub fn open_with_options<P: AsRef<Path>>(
        path: P,
        options: ExtractOptions,
    ) -> Result<Self, ExtractError> {
        let path = path.as_ref().to_path_buf();

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| ExtractError::Open {
            path: path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input = ffmpeg_next::format::input(&path).map_err(|error| ExtractError::Open {
            path: path.clone(),
            reason: error.to_string(),
        })?;

        // Select the first video stream in container order.
        let (stream_index, time_base, avg_frame_rate, fallback_rate, parameters) = {
            let stream = input
                .streams()
                .find(|stream| stream.parameters().medium() == Type::Video)
                .ok_or(ExtractError::NoVideoStream)?;
            (
                stream.index(),
                stream.time_base(),
                stream.avg_frame_rate(),
                stream.rate(),
                stream.parameters(),
            )
        };

        let codec_id = parameters.id();
        let decoder_context =
            CodecContext::from_parameters(parameters).map_err(|error| {
                ExtractError::UnsupportedCodec {
                    codec: format!("{}: {error}", codec_id.name()),
                }
            })?;
        let decoder = decoder_context.decoder().video().map_err(|error| {
            ExtractError::UnsupportedCodec {
                codec: format!("{}: {error}", codec_id.name()),
            }
        })?;

        let source_width = decoder.width();
        let source_height = decoder.height();
        let source_format = decoder.format();
        if source_width == 0 || source_height == 0 {
            return Err(ExtractError::UnsupportedCodec {
                codec: format!("{}: stream reports zero dimensions", codec_id.name()),
            });
        }

        let (width, height) = options.resolve_dimensions(source_width, source_height);

        let scaler = ScalingContext::get(
            source_format,
            source_width,
            source_height,
            Pixel::RGB24,
            width,
            height,
            ScalingFlags::BILINEAR,
        )
        .map_err(|error| ExtractError::Conversion(error.to_string()))?;

        // Checked sizing: absurd geometries must surface as Allocation
        // instead of wrapping.
        let buffer_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(ExtractError::Allocation { width, height })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(buffer_len)
            .map_err(|_| ExtractError::Allocation { width, height })?;

        let frames_per_second = if avg_frame_rate.denominator() != 0 {
            avg_frame_rate.numerator() as f64 / avg_frame_rate.denominator() as f64
        } else if fallback_rate.denominator() != 0 {
            fallback_rate.numerator() as f64 / fallback_rate.denominator() as f64
        } else {
            0.0
        };

        let duration_microseconds = input.duration();
        let duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64)
        } else {
            Duration::ZERO
        };

        let frame_count = if frames_per_second > 0.0 {
            (duration.as_secs_f64() * frames_per_second) as u64
        } else {
            0
        };

        let codec_name = decoder
            .codec()
            .map(|codec| codec.name().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let metadata = VideoMetadata {
            width,
            height,
            frames_per_second,
            frame_count,
            codec: codec_name,
            format: input.format().name().to_string(),
            duration,
        };

        log::debug!(
            "Opened {} (stream {stream_index}, {width}x{height}, {frames_per_second:.2} fps)",
            path.display(),
        );

        Ok(Self {
            decoded: VideoFrame::empty(),
            converted: VideoFrame::empty(),
            pixels,
            scaler,
            decoder,
            input,
            stream_index,
            time_base,
            width,
            height,
            metadata,
            path,
            eof_sent: false,
            finished: false,
        })
    }

    /// Decode, convert, and return the next frame of the selected stream.
    ///
    /// Pulls packets from the container until the decoder emits a frame.
    /// Packets belonging to other streams (audio, subtitles) are silently
    /// skipped. Decoders may buffer internally, so a single packet can yield
    /// zero frames; the loop keeps pulling until one is produced or the
    /// container is exhausted.
    ///
    /// Returns `Ok(None)` once the stream has ended; further calls keep
    /// returning `Ok(None)`. Frames are produced in presentation order, one
    /// call per frame, with none skipped.
    ///
    /// The returned [`RgbFrame`] borrows this extractor's pixel buffer,
    /// which is overwritten by the next call; copy out (e.g. with
    /// [`RgbFrame::to_image`]) anything that must outlive it.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Decode`] if the decoder rejects a packet as corrupt
    ///   or the demuxer fails mid-stream.
    /// - [`ExtractError::Conversion`] if pixel-format conversion fails.
    pub fn read_frame(&mut self) -> Result<Option<RgbFrame<'_>>, ExtractError> {
        if self.finished {
            return Ok(None);
        }

        loop {
            // Drain any frame the decoder has already produced.
            if self.decoder.receive_frame(&mut self.decoded).is_ok() {
                self.scaler
                    .run(&self.decoded, &mut self.converted)
                    .map_err(|error| ExtractError::Conversion(error.to_string()))?;
                convert::pack_rgb_plane(&self.converted, self.width, self.height, &mut self.pixels);

                let pts = self.decoded.pts();
                log::trace!("Decoded frame at pts {pts:?}");
                return Ok(Some(RgbFrame {
                    data: &self.pixels,
                    width: self.width,
                    height: self.height,
                    pts,
                    time_base: self.time_base,
                }));
            }

            // Decoder is starved. If the container is already exhausted and
            // the decoder was switched to drain mode, the stream has ended.
            if self.eof_sent {
                self.finished = true;
                log::debug!("End of stream for {}", self.path.display());
                return Ok(None);
            }

            let mut packet = Packet::empty();
            match packet.read(&mut self.input) {
                Ok(()) => {
                    if packet.stream() == self.stream_index {
                        self.decoder
                            .send_packet(&packet)
                            .map_err(|error| ExtractError::Decode(error.to_string()))?;
                    }
                    // Packets from other streams are dropped undecoded.
                }
                Err(FfmpegError::Eof) => {
                    self.decoder
                        .send_eof()
                        .map_err(|error| ExtractError::Decode(error.to_string()))?;
                    self.eof_sent = true;
                }
                Err(error) => {
                    return Err(ExtractError::Decode(error.to_string()));
                }
            }
        }
    }

    /// Iterate over the remaining frames as owned [`image::RgbImage`]
    /// values.
    ///
    /// The iterator borrows this extractor mutably and ends at end of
    /// stream. See [`Frames`].
    pub fn frames(&mut self) -> Frames<'_> {
        Frames::new(self)
    }

    /// Get a reference to the cached metadata.
    ///
    /// Metadata is extracted once during [`open`](VideoExtractor::open) and
    /// does not require additional decoding.
    pub fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    /// Output frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Index of the selected video stream within the container.
    pub fn stream_index(&self) -> usize {
        self.stream_index
    }

    /// Release the extractor and every resource it owns.
    ///
    /// Teardown runs in reverse acquisition order (scratch buffers, then
    /// decoder, then demuxer) and cannot fail. This is equivalent to
    /// dropping the extractor; it exists for callers who want teardown to be
    /// visible in the code. Double-release is impossible: `close` consumes
    /// the extractor.
    pub fn close(self) {
        log::debug!("Closing extractor for {}", self.path.display());
    }
}

/// A borrowed view of one decoded, color-converted frame.
///
/// The pixel data lives in the extractor's reusable buffer, so the view is
/// only valid until the next [`read_frame`](VideoExtractor::read_frame) call
/// (the borrow checker enforces this). Use [`to_image`](RgbFrame::to_image)
/// to copy the frame out.
#[derive(Debug)]
pub struct RgbFrame<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    pts: Option<i64>,
    time_base: Rational,
}

impl RgbFrame<'_> {
    /// Raw pixel data: row-major packed RGB24, stride = width × 3,
    /// length = width × height × 3.
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Presentation timestamp in the stream's time base, if the decoder
    /// reported one.
    pub fn pts(&self) -> Option<i64> {
        self.pts
    }

    /// Presentation timestamp converted to a [`Duration`] using the
    /// stream's time base. `None` if no PTS is present.
    pub fn timestamp(&self) -> Option<Duration> {
        self.pts
            .map(|pts| Duration::from_secs_f64(convert::pts_to_seconds(pts, self.time_base).max(0.0)))
    }

    /// Copy the frame into an owned [`image::RgbImage`].
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Conversion`] if the buffer does not match the
    /// frame dimensions, an internal inconsistency that should not occur.
    pub fn to_image(&self) -> Result<RgbImage, ExtractError> {
        RgbImage::from_raw(self.width, self.height, self.data.to_vec()).ok_or_else(|| {
            ExtractError::Conversion(
                "Pixel buffer does not match frame dimensions".to_string(),
            )
        })
    }
}
