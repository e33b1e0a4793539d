//! Transcript segment types and output format writers.
//!
//! Converts an ordered list of timed text segments into subtitle and
//! document formats: txt, json, srt, vtt, csv, docx, pdf.

pub mod error;
pub mod format;
pub mod timestamp;
pub mod types;
pub mod writer;

pub use error::{Error, Result};
pub use format::OutputFormat;
pub use types::Segment;
pub use writer::write_transcript;
