//! Error types for ytt-dl organized by retrieval stage.

use thiserror::Error;

/// Transcript retrieval error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// URL does not contain a recognizable video id
    #[error("could not extract a video id from url: {0}")]
    InvalidUrl(String),

    /// Watch page did not embed the expected player data
    #[error("no player data found on watch page for video {0}")]
    MissingPlayerData(String),

    /// Video has no caption tracks at all
    #[error("no caption tracks available for video {0}")]
    NoCaptions(String),

    /// Requested language has no caption track
    #[error("no caption track for language {lang:?} (available: {available})")]
    LanguageNotFound { lang: String, available: String },

    /// Playlist page contained no entries
    #[error("no playlist entries found at {0}")]
    EmptyPlaylist(String),

    /// HTTP transport error
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Payload deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ytt-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
