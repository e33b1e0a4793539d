//! Format writers from segments to byte streams.
//!
//! Each writer is a pure function from an ordered segment list to one
//! output format.

pub mod csv;
pub mod docx;
pub mod json;
pub mod pdf;
pub mod srt;
pub mod txt;
pub mod vtt;

use crate::error::Result;
use crate::format::OutputFormat;
use crate::types::Segment;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write segments to `path` in the selected format.
pub fn write_transcript(segments: &[Segment], format: OutputFormat, path: &Path) -> Result<()> {
    tracing::debug!(
        ?format,
        path = ?path.display(),
        segments = segments.len(),
        "writing transcript"
    );

    let mut out = BufWriter::new(File::create(path)?);
    write_to(segments, format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write segments in the selected format to any writer.
pub fn write_to<W: Write>(segments: &[Segment], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Txt => txt::write(segments, out),
        OutputFormat::Json => json::write(segments, out),
        OutputFormat::Srt => srt::write(segments, out),
        OutputFormat::Vtt => vtt::write(segments, out),
        OutputFormat::Csv => csv::write(segments, out),
        OutputFormat::Docx => docx::write(segments, out),
        OutputFormat::Pdf => pdf::write(segments, out),
    }
}
