//! Plain text writer: one segment per line.

use crate::error::Result;
use crate::types::Segment;
use std::io::Write;

pub fn write<W: Write>(segments: &[Segment], out: &mut W) -> Result<()> {
    for segment in segments {
        writeln!(out, "{}", segment.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_segment() {
        let segments = vec![
            Segment::new("first", 0.0, Some(1.0)),
            Segment::new("second", 1.0, Some(1.0)),
        ];

        let mut out = Vec::new();
        write(&segments, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn empty_transcript_writes_nothing() {
        let mut out = Vec::new();
        write(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
