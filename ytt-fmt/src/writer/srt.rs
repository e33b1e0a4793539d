//! SRT subtitle writer.
//!
//! Converts segments with timestamps into SRT cue blocks.

use crate::error::Result;
use crate::types::{with_next_start, Segment};
use srtlib::{Subtitle, Timestamp};
use std::io::Write;

/// Convert segments to SRT subtitles.
pub fn to_subtitles(segments: &[Segment]) -> Vec<Subtitle> {
    with_next_start(segments)
        .zip(1..)
        .map(|((segment, next_start), index)| create_subtitle(segment, next_start, index))
        .collect()
}

/// Create a numbered subtitle cue from a segment.
fn create_subtitle(segment: &Segment, next_start: Option<f64>, index: usize) -> Subtitle {
    Subtitle::new(
        index,
        secs_to_timestamp(segment.start),
        secs_to_timestamp(segment.cue_end(next_start)),
        segment.text.clone(),
    )
}

/// Convert seconds to SRT Timestamp
fn secs_to_timestamp(secs: f64) -> Timestamp {
    Timestamp::from_milliseconds((secs.max(0.0) * 1000.0).round() as u32)
}

pub fn write<W: Write>(segments: &[Segment], out: &mut W) -> Result<()> {
    let blocks: Vec<String> = to_subtitles(segments)
        .iter()
        .map(|subtitle| subtitle.to_string())
        .collect();

    out.write_all(blocks.join("\n\n").as_bytes())?;
    if !blocks.is_empty() {
        out.write_all(b"\n")?;
    }
    Ok(())
}
