//! Output format selection.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Supported output formats.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Txt,
    Json,
    Srt,
    Vtt,
    Csv,
    Docx,
    Pdf,
}

impl OutputFormat {
    /// All supported formats, in help-text order.
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Txt,
        OutputFormat::Json,
        OutputFormat::Srt,
        OutputFormat::Vtt,
        OutputFormat::Csv,
        OutputFormat::Docx,
        OutputFormat::Pdf,
    ];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Srt => "srt",
            OutputFormat::Vtt => "vtt",
            OutputFormat::Csv => "csv",
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Txt),
            "json" => Ok(OutputFormat::Json),
            "srt" => Ok(OutputFormat::Srt),
            "vtt" => Ok(OutputFormat::Vtt),
            "csv" => Ok(OutputFormat::Csv),
            "docx" => Ok(OutputFormat::Docx),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}
