//! YouTube transcript retrieval.
//!
//! Scrapes caption track metadata from a video's watch page and fetches the
//! selected track from the timedtext endpoint in `json3` form. Playlist
//! pages are expanded the same way, from their embedded initial data.

pub mod error;
pub mod fetch;
pub mod playlist;
pub mod scrape;
pub mod video;

pub use error::{Error, Result};
pub use fetch::TranscriptClient;
pub use playlist::PlaylistEntry;
pub use video::VideoId;
