//! Read every frame of a media file and save the first few as PNGs.
//!
//! Usage:
//!   cargo run --example extract_frames -- <input_file>

use std::error::Error;

use framepull::VideoExtractor;

fn main() -> Result<(), Box<dyn Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.mp4".to_string());

    println!("Opening {input_path}...");
    let mut extractor = VideoExtractor::open(&input_path)?;

    let metadata = extractor.metadata();
    println!(
        "Video: {}x{}, {:.2} fps, ~{} frames ({})",
        metadata.width,
        metadata.height,
        metadata.frames_per_second,
        metadata.frame_count,
        metadata.codec,
    );

    let mut count = 0u64;
    while let Some(frame) = extractor.read_frame()? {
        if count < 5 {
            let filename = format!("frame_{count}.png");
            frame.to_image()?.save(&filename)?;
            println!("Saved {filename} (pts {:?})", frame.pts());
        }
        count += 1;
    }

    println!("Decoded {count} frames");
    Ok(())
}
