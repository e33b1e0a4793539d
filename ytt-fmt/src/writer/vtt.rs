//! WebVTT subtitle writer.

use crate::error::Result;
use crate::timestamp;
use crate::types::{with_next_start, Segment};
use std::io::Write;

pub fn write<W: Write>(segments: &[Segment], out: &mut W) -> Result<()> {
    writeln!(out, "WEBVTT")?;
    writeln!(out)?;

    for (segment, next_start) in with_next_start(segments) {
        writeln!(
            out,
            "{} --> {}",
            timestamp::vtt(segment.start),
            timestamp::vtt(segment.cue_end(next_start))
        )?;
        writeln!(out, "{}", segment.text)?;
        writeln!(out)?;
    }
    Ok(())
}
