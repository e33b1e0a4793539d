//! CSV writer with `start,duration,text` columns.
//!
//! Quoting and escaping follow RFC 4180 via the csv crate. Timestamps are
//! rendered in WebVTT form; a missing duration becomes an empty cell.

use crate::error::Result;
use crate::timestamp;
use crate::types::Segment;
use std::io::Write;

pub fn write<W: Write>(segments: &[Segment], out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["start", "duration", "text"])?;

    for segment in segments {
        let duration = segment.duration.map(timestamp::vtt).unwrap_or_default();
        writer.write_record([
            timestamp::vtt(segment.start),
            duration,
            segment.text.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let segments = vec![Segment::new("plain", 1.0, Some(0.5))];

        let mut out = Vec::new();
        write(&segments, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "start,duration,text\n00:00:01.000,00:00:00.500,plain\n"
        );
    }

    #[test]
    fn quotes_embedded_commas_and_quotes() {
        let segments = vec![Segment::new("he said \"hi, there\"", 0.0, None)];

        let mut out = Vec::new();
        write(&segments, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"he said \"\"hi, there\"\"\""));
    }

    #[test]
    fn missing_duration_is_empty_cell() {
        let segments = vec![Segment::new("x", 0.0, None)];

        let mut out = Vec::new();
        write(&segments, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("00:00:00.000,,x"));
    }
}
