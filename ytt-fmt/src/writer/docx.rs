//! DOCX writer: one paragraph per segment.
//!
//! Each paragraph carries an italic `[HH:MM:SS.mmm]` run followed by the
//! segment text.

use crate::error::{Error, Result};
use crate::timestamp;
use crate::types::Segment;
use docx_rs::{Docx, Paragraph, Run};
use std::io::{Cursor, Write};

pub fn write<W: Write>(segments: &[Segment], out: &mut W) -> Result<()> {
    let mut docx = Docx::new();

    for segment in segments {
        let stamp = format!("[{}] ", timestamp::vtt(segment.start));
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text(stamp).italic())
            .add_run(Run::new().add_text(segment.text.as_str()));
        docx = docx.add_paragraph(paragraph);
    }

    // The docx container is a zip archive, which needs a seekable sink.
    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Docx(e.to_string()))?;

    out.write_all(buffer.get_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_a_zip_container() {
        let segments = vec![Segment::new("Hello.", 0.0, Some(1.0))];

        let mut out = Vec::new();
        write(&segments, &mut out).unwrap();

        // Office Open XML documents are zip archives
        assert_eq!(&out[..4], b"PK\x03\x04");
    }

    #[test]
    fn empty_transcript_still_packs() {
        let mut out = Vec::new();
        write(&[], &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
