//! Video id extraction from URL forms.

use crate::error::{Error, Result};
use std::fmt;
use url::Url;

/// Validated YouTube video identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract a video id from a watch URL.
///
/// Recognizes the `v` query parameter plus short forms where the id is the
/// last path segment (`youtu.be/<id>`, `/shorts/<id>`, `/embed/<id>`). A
/// bare id passes through unchanged.
pub fn extract_video_id(input: &str) -> Result<VideoId> {
    match Url::parse(input) {
        Ok(url) => id_from_url(&url),
        // not a URL; may still be a bare id
        Err(_) if looks_like_id(input) => Some(VideoId(input.to_string())),
        Err(_) => None,
    }
    .ok_or_else(|| Error::InvalidUrl(input.to_string()))
}

fn id_from_url(url: &Url) -> Option<VideoId> {
    if let Some((_, value)) = url.query_pairs().find(|(key, _)| key == "v") {
        if looks_like_id(&value) {
            return Some(VideoId(value.into_owned()));
        }
    }

    let candidate = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    looks_like_id(candidate).then(|| VideoId(candidate.to_string()))
}

fn looks_like_id(s: &str) -> bool {
    s.len() >= 6
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=jNQXAC9IVRw").unwrap();
        assert_eq!(id.as_str(), "jNQXAC9IVRw");
    }

    #[test]
    fn extracts_from_short_url() {
        let id = extract_video_id("https://youtu.be/jNQXAC9IVRw").unwrap();
        assert_eq!(id.as_str(), "jNQXAC9IVRw");
    }

    #[test]
    fn extracts_from_shorts_and_embed_paths() {
        for url in [
            "https://www.youtube.com/shorts/jNQXAC9IVRw",
            "https://www.youtube.com/embed/jNQXAC9IVRw",
        ] {
            assert_eq!(extract_video_id(url).unwrap().as_str(), "jNQXAC9IVRw");
        }
    }

    #[test]
    fn v_parameter_wins_over_path() {
        let id = extract_video_id("https://www.youtube.com/watch?t=10&v=jNQXAC9IVRw").unwrap();
        assert_eq!(id.as_str(), "jNQXAC9IVRw");
    }

    #[test]
    fn fragments_are_stripped() {
        for url in [
            "https://youtu.be/jNQXAC9IVRw#t=5",
            "https://www.youtube.com/watch?v=jNQXAC9IVRw#player",
        ] {
            assert_eq!(extract_video_id(url).unwrap().as_str(), "jNQXAC9IVRw");
        }
    }

    #[test]
    fn accepts_bare_id() {
        let id = extract_video_id("jNQXAC9IVRw").unwrap();
        assert_eq!(id.as_str(), "jNQXAC9IVRw");
    }

    #[test]
    fn rejects_host_only_url() {
        assert!(matches!(
            extract_video_id("https://www.youtube.com/"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
