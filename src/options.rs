//! Extraction options.
//!
//! [`ExtractOptions`] controls the resolution of the frames an extractor
//! produces. When no dimensions are set, frames keep the source resolution.
//! Setting one dimension together with
//! [`maintain_aspect_ratio`](ExtractOptions::with_maintain_aspect_ratio)
//! computes the other dimension automatically.
//!
//! Output pixel format is always packed RGB24 (3 bytes per pixel); the
//! options only affect geometry.
//!
//! # Example
//!
//! ```no_run
//! use framepull::{ExtractOptions, VideoExtractor};
//!
//! // Downscale to 640 pixels wide, keeping the aspect ratio.
//! let options = ExtractOptions::new().with_width(640);
//! let extractor = VideoExtractor::open_with_options("input.mp4", options).unwrap();
//! ```

/// Output settings for frame extraction.
#[derive(Debug, Clone)]
#[must_use]
pub struct ExtractOptions {
    /// Target width. `None` keeps the source width.
    pub width: Option<u32>,
    /// Target height. `None` keeps the source height.
    pub height: Option<u32>,
    /// When `true` and only one dimension is specified, the other is
    /// computed to preserve the source aspect ratio.
    pub maintain_aspect_ratio: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            maintain_aspect_ratio: true,
        }
    }
}

impl ExtractOptions {
    /// Create options with default settings: source resolution, aspect
    /// ratio preserved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target output width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the target output height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set both output dimensions at once.
    ///
    /// Pass `None` for either dimension to keep the source value.
    pub fn with_resolution(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Control whether aspect ratio is preserved when only one output
    /// dimension is specified. Defaults to `true`.
    pub fn with_maintain_aspect_ratio(mut self, maintain: bool) -> Self {
        self.maintain_aspect_ratio = maintain;
        self
    }

    /// Resolve the final output dimensions given the source size.
    ///
    /// Returns `(width, height)`.
    pub(crate) fn resolve_dimensions(&self, source_width: u32, source_height: u32) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) if self.maintain_aspect_ratio && source_width > 0 => {
                let ratio = w as f64 / source_width as f64;
                let h = (source_height as f64 * ratio).round() as u32;
                (w, h.max(1))
            }
            (Some(w), None) => (w, source_height),
            (None, Some(h)) if self.maintain_aspect_ratio && source_height > 0 => {
                let ratio = h as f64 / source_height as f64;
                let w = (source_width as f64 * ratio).round() as u32;
                (w.max(1), h)
            }
            (None, Some(h)) => (source_width, h),
            (None, None) => (source_width, source_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExtractOptions;

    #[test]
    fn defaults_keep_source_resolution() {
        let options = ExtractOptions::new();
        assert_eq!(options.resolve_dimensions(1920, 1080), (1920, 1080));
    }

    #[test]
    fn explicit_dimensions_win() {
        let options = ExtractOptions::new().with_resolution(Some(320), Some(240));
        assert_eq!(options.resolve_dimensions(1920, 1080), (320, 240));
    }

    #[test]
    fn width_only_preserves_aspect_ratio() {
        let options = ExtractOptions::new().with_width(960);
        assert_eq!(options.resolve_dimensions(1920, 1080), (960, 540));
    }

    #[test]
    fn height_only_preserves_aspect_ratio() {
        let options = ExtractOptions::new().with_height(540);
        assert_eq!(options.resolve_dimensions(1920, 1080), (960, 540));
    }

    #[test]
    fn width_only_without_aspect_ratio_keeps_source_height() {
        let options = ExtractOptions::new()
            .with_width(960)
            .with_maintain_aspect_ratio(false);
        assert_eq!(options.resolve_dimensions(1920, 1080), (960, 1080));
    }

    #[test]
    fn aspect_ratio_result_is_at_least_one_pixel() {
        let options = ExtractOptions::new().with_width(1);
        let (_, height) = options.resolve_dimensions(10_000, 2);
        assert!(height >= 1);
    }
}
