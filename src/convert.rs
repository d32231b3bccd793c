//! Internal pixel-copy and timestamp helpers.

use ffmpeg_next::{Rational, frame::Video as VideoFrame};

/// Copy the RGB24 plane of `frame` into `dest`, stripping per-row stride
/// padding.
///
/// FFmpeg frames frequently carry per-row padding (stride > width × 3).
/// `dest` is cleared and refilled; its capacity is retained across calls, so
/// after the first frame no further allocation happens.
pub(crate) fn pack_rgb_plane(frame: &VideoFrame, width: u32, height: u32, dest: &mut Vec<u8>) {
    let stride = frame.stride(0);
    let row_bytes = (width as usize) * 3;
    let data = frame.data(0);

    dest.clear();
    if stride == row_bytes {
        // No padding: copy the entire plane at once.
        dest.extend_from_slice(&data[..row_bytes * (height as usize)]);
    } else {
        for row in 0..(height as usize) {
            let row_start = row * stride;
            dest.extend_from_slice(&data[row_start..row_start + row_bytes]);
        }
    }
}

/// Rescale a PTS value from stream time base to seconds.
pub(crate) fn pts_to_seconds(pts: i64, time_base: Rational) -> f64 {
    pts as f64 * time_base.numerator() as f64 / time_base.denominator().max(1) as f64
}

#[cfg(test)]
mod tests {
    use ffmpeg_next::Rational;

    use super::pts_to_seconds;

    #[test]
    fn pts_rescales_with_time_base() {
        // 90 kHz clock, one second.
        assert_eq!(pts_to_seconds(90_000, Rational::new(1, 90_000)), 1.0);
        // 1/24 time base, frame 48 is at the two-second mark.
        assert_eq!(pts_to_seconds(48, Rational::new(1, 24)), 2.0);
    }

    #[test]
    fn zero_denominator_does_not_divide_by_zero() {
        let seconds = pts_to_seconds(1_000, Rational::new(1, 0));
        assert!(seconds.is_finite());
    }
}
