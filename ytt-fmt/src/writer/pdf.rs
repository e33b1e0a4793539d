//! PDF writer: paginated transcript rendering.
//!
//! A4 pages with a bold timestamp header line per segment and greedily
//! wrapped body text in 11pt Helvetica.

use crate::error::{Error, Result};
use crate::timestamp;
use crate::types::Segment;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::io::{BufWriter, Write};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const PARAGRAPH_GAP_MM: f32 = 2.0;
const FONT_SIZE_PT: f32 = 11.0;
/// Rough character budget for one line of 11pt Helvetica on A4.
const MAX_LINE_CHARS: usize = 90;

struct Page {
    layer: PdfLayerReference,
    /// Distance of the text baseline from the page bottom.
    cursor_mm: f32,
}

pub fn write<W: Write>(segments: &[Segment], out: &mut W) -> Result<()> {
    let (doc, page_index, layer_index) = PdfDocument::new(
        "Transcript",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "transcript",
    );

    let regular = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin_font(&doc, BuiltinFont::HelveticaBold)?;

    let mut page = Page {
        layer: doc.get_page(page_index).get_layer(layer_index),
        cursor_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    for segment in segments {
        let header = format!("[{}]", timestamp::vtt(segment.start));
        draw_line(&doc, &mut page, &header, &bold);
        for line in wrap(&segment.text, MAX_LINE_CHARS) {
            draw_line(&doc, &mut page, &line, &regular);
        }
        page.cursor_mm -= PARAGRAPH_GAP_MM;
    }

    doc.save(&mut BufWriter::new(out))
        .map_err(|e| Error::Pdf(e.to_string()))
}

fn builtin_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| Error::Pdf(e.to_string()))
}

/// Draw one text line, starting a fresh page when the cursor runs out.
fn draw_line(doc: &PdfDocumentReference, page: &mut Page, text: &str, font: &IndirectFontRef) {
    if page.cursor_mm < MARGIN_MM {
        let (page_index, layer_index) =
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "transcript");
        page.layer = doc.get_page(page_index).get_layer(layer_index);
        page.cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    page.layer.use_text(
        text,
        FONT_SIZE_PT,
        Mm(MARGIN_MM),
        Mm(page.cursor_mm),
        font,
    );
    page.cursor_mm -= LINE_HEIGHT_MM;
}

/// Greedy word wrap by character count; overlong words are hard-split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    let mut push_piece = |piece: &str, lines: &mut Vec<String>, current: &mut String| {
        let piece_len = piece.chars().count();
        if !current.is_empty() && current.chars().count() + 1 + piece_len > max_chars {
            lines.push(std::mem::take(current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(piece);
    };

    for word in text.split_whitespace() {
        if word.chars().count() <= max_chars {
            push_piece(word, &mut lines, &mut current);
        } else {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                push_piece(&chunk.iter().collect::<String>(), &mut lines, &mut current);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
