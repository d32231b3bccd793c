//! Frame extraction integration tests.
//!
//! Tests require fixture files from `tests/fixtures/generate_fixtures.sh`:
//! `sample_video.mp4` is 2 seconds of 320x240 moving test video at 24 fps
//! (exactly 48 frames) with an audio track, `sample_video_only.mp4` is the
//! same without audio.

use std::path::Path;

use framepull::{ExtractOptions, VideoExtractor};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

fn sample_video_only_path() -> &'static str {
    "tests/fixtures/sample_video_only.mp4"
}

// ── open ───────────────────────────────────────────────────────────

#[test]
fn open_reports_dimensions_and_stream() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let extractor = VideoExtractor::open(path).expect("Failed to open fixture");
    assert_eq!(extractor.width(), 320);
    assert_eq!(extractor.height(), 240);

    let metadata = extractor.metadata();
    assert_eq!(metadata.width, 320);
    assert_eq!(metadata.height, 240);
    assert!(
        (metadata.frames_per_second - 24.0).abs() < 0.5,
        "Expected ~24 fps, got {}",
        metadata.frames_per_second,
    );
    assert!(!metadata.codec.is_empty());
    assert!(!metadata.format.is_empty());
}

// ── full drain ─────────────────────────────────────────────────────

#[test]
fn drains_exactly_48_frames_then_end_of_stream() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut extractor = VideoExtractor::open(path).expect("Failed to open fixture");
    let expected_len = (extractor.width() * extractor.height() * 3) as usize;

    let mut count = 0u64;
    while let Some(frame) = extractor.read_frame().expect("Decode error") {
        assert_eq!(frame.data().len(), expected_len);
        assert_eq!(frame.width(), 320);
        assert_eq!(frame.height(), 240);
        count += 1;
    }
    assert_eq!(count, 48, "2 seconds at 24 fps should yield 48 frames");

    // End of stream is sticky.
    assert!(extractor.read_frame().expect("Decode error").is_none());
    assert!(extractor.read_frame().expect("Decode error").is_none());
}

#[test]
fn audio_packets_are_skipped_transparently() {
    // The muxed and video-only fixtures carry identical video; frame counts
    // must match even though one interleaves audio packets.
    let muxed = sample_video_path();
    let video_only = sample_video_only_path();
    if !Path::new(muxed).exists() || !Path::new(video_only).exists() {
        return;
    }

    let mut count_muxed = 0u64;
    let mut extractor = VideoExtractor::open(muxed).expect("Failed to open fixture");
    while extractor.read_frame().expect("Decode error").is_some() {
        count_muxed += 1;
    }

    let mut count_video_only = 0u64;
    let mut extractor = VideoExtractor::open(video_only).expect("Failed to open fixture");
    while extractor.read_frame().expect("Decode error").is_some() {
        count_video_only += 1;
    }

    assert_eq!(count_muxed, count_video_only);
}

// ── ordering ───────────────────────────────────────────────────────

#[test]
fn frames_arrive_in_presentation_order() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut extractor = VideoExtractor::open(path).expect("Failed to open fixture");
    let mut last_pts: Option<i64> = None;

    while let Some(frame) = extractor.read_frame().expect("Decode error") {
        if let (Some(previous), Some(current)) = (last_pts, frame.pts()) {
            assert!(
                current >= previous,
                "PTS went backwards: {previous} -> {current}",
            );
        }
        if frame.pts().is_some() {
            last_pts = frame.pts();
        }
    }
}

// ── buffer reuse ───────────────────────────────────────────────────

#[test]
fn buffer_is_overwritten_by_next_read() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut extractor = VideoExtractor::open(path).expect("Failed to open fixture");

    // Copy frame 0 before reading frame 1; the fixture has moving content,
    // so the copies must differ.
    let first: Vec<u8> = extractor
        .read_frame()
        .expect("Decode error")
        .expect("Expected a first frame")
        .data()
        .to_vec();

    // Step a few frames in so the test pattern has visibly moved.
    let mut later: Option<Vec<u8>> = None;
    for _ in 0..5 {
        later = extractor
            .read_frame()
            .expect("Decode error")
            .map(|frame| frame.data().to_vec());
    }

    let later = later.expect("Expected at least 6 frames");
    assert_eq!(first.len(), later.len());
    assert_ne!(first, later, "Moving content should change between frames");
}

// ── independence ───────────────────────────────────────────────────

#[test]
fn distinct_extractors_advance_independently() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut first = VideoExtractor::open(path).expect("Failed to open fixture");
    let mut second = VideoExtractor::open(path).expect("Failed to open fixture");

    // Advance the first extractor well past the second.
    for _ in 0..10 {
        first.read_frame().expect("Decode error");
    }

    let frame_first = first.read_frame().expect("Decode error").and_then(|f| f.pts());
    let frame_second = second.read_frame().expect("Decode error").and_then(|f| f.pts());

    if let (Some(ahead), Some(start)) = (frame_first, frame_second) {
        assert!(
            ahead > start,
            "Handles share no decode position: {ahead} should be past {start}",
        );
    }
}

// ── options ────────────────────────────────────────────────────────

#[test]
fn resolution_override_resizes_output() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let options = ExtractOptions::new().with_resolution(Some(160), Some(120));
    let mut extractor =
        VideoExtractor::open_with_options(path, options).expect("Failed to open fixture");
    assert_eq!(extractor.width(), 160);
    assert_eq!(extractor.height(), 120);

    let frame = extractor
        .read_frame()
        .expect("Decode error")
        .expect("Expected a frame");
    assert_eq!(frame.data().len(), 160 * 120 * 3);
}

#[test]
fn width_only_override_keeps_aspect_ratio() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let options = ExtractOptions::new().with_width(160);
    let extractor =
        VideoExtractor::open_with_options(path, options).expect("Failed to open fixture");
    // 320x240 scaled to width 160 keeps the 4:3 ratio.
    assert_eq!(extractor.width(), 160);
    assert_eq!(extractor.height(), 120);
}

// ── teardown ───────────────────────────────────────────────────────

#[test]
fn explicit_close_after_partial_read() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut extractor = VideoExtractor::open(path).expect("Failed to open fixture");
    extractor.read_frame().expect("Decode error");
    extractor.close();
}

#[test]
fn close_after_end_of_stream() {
    let path = sample_video_only_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut extractor = VideoExtractor::open(path).expect("Failed to open fixture");
    while extractor.read_frame().expect("Decode error").is_some() {}
    extractor.close();
}

#[test]
fn timestamps_track_frame_rate() {
    let path = sample_video_only_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut extractor = VideoExtractor::open(path).expect("Failed to open fixture");

    // Skip to the last frame and check its wall-clock position: frame 47 of
    // a 24 fps stream sits just under the 2-second mark.
    let mut last_timestamp = None;
    while let Some(frame) = extractor.read_frame().expect("Decode error") {
        if let Some(timestamp) = frame.timestamp() {
            last_timestamp = Some(timestamp);
        }
    }

    let last_timestamp = last_timestamp.expect("Fixture frames should carry timestamps");
    let seconds = last_timestamp.as_secs_f64();
    assert!(
        (seconds - 47.0 / 24.0).abs() < 0.1,
        "Last frame should sit near 1.958s, got {seconds}",
    );
}
