//! JSON writer: pretty-printed segment array.

use crate::error::Result;
use crate::types::Segment;
use std::io::Write;

pub fn write<W: Write>(segments: &[Segment], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, segments)?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_segments() {
        let segments = vec![
            Segment::new("a", 0.0, Some(1.25)),
            Segment::new("b", 1.25, None),
        ];

        let mut out = Vec::new();
        write(&segments, &mut out).unwrap();

        let parsed: Vec<Segment> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, segments);
    }

    #[test]
    fn missing_duration_is_explicit_null() {
        let segments = vec![Segment::new("a", 0.0, None)];

        let mut out = Vec::new();
        write(&segments, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"duration\": null"));
    }
}
