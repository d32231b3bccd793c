//! Owned-frame iteration.
//!
//! [`Frames`] implements [`Iterator`] over the remaining frames of a
//! [`VideoExtractor`], copying each decoded frame into an owned
//! [`image::RgbImage`]. Use it when the borrow-tied view returned by
//! [`read_frame`](VideoExtractor::read_frame) is inconvenient — e.g. to
//! collect frames or hand them to other threads.
//!
//! # Example
//!
//! ```no_run
//! use framepull::VideoExtractor;
//!
//! let mut extractor = VideoExtractor::open("input.mp4")?;
//! for (index, frame) in extractor.frames().enumerate() {
//!     let image = frame?;
//!     image.save(format!("frame_{index}.png")).ok();
//! }
//! # Ok::<(), framepull::ExtractError>(())
//! ```

use image::RgbImage;

use crate::{error::ExtractError, extractor::VideoExtractor};

/// A lazy iterator over decoded video frames.
///
/// Frames are decoded one at a time as [`next()`](Iterator::next) is called.
/// The iterator borrows the underlying [`VideoExtractor`] mutably, so no
/// other extraction can happen while it is alive; dropping it releases the
/// borrow and the extractor can keep being used (iteration and
/// [`read_frame`](VideoExtractor::read_frame) share the same decode
/// position).
///
/// Iteration ends at end of stream. A decode error is yielded once, after
/// which the iterator is fused.
///
/// Created via [`VideoExtractor::frames`].
pub struct Frames<'a> {
    extractor: &'a mut VideoExtractor,
    done: bool,
}

impl<'a> Frames<'a> {
    pub(crate) fn new(extractor: &'a mut VideoExtractor) -> Self {
        log::debug!("Creating frame iterator");
        Self {
            extractor,
            done: false,
        }
    }
}

impl Iterator for Frames<'_> {
    type Item = Result<RgbImage, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.extractor.read_frame() {
            Ok(Some(frame)) => match frame.to_image() {
                Ok(image) => Some(Ok(image)),
                Err(error) => {
                    self.done = true;
                    Some(Err(error))
                }
            },
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}
