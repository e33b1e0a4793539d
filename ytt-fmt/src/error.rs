//! Error types for ytt-fmt.

use thiserror::Error;

/// Writer error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown output format name
    #[error("unsupported format: {0} (expected one of txt, json, srt, vtt, csv, docx, pdf)")]
    UnknownFormat(String),

    /// IO error while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// DOCX packaging error
    #[error("failed to assemble docx: {0}")]
    Docx(String),

    /// PDF rendering error
    #[error("failed to assemble pdf: {0}")]
    Pdf(String),
}

/// Result type alias for ytt-fmt operations.
pub type Result<T> = std::result::Result<T, Error>;
