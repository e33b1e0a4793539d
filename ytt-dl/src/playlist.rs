//! Playlist expansion.

use crate::error::{Error, Result};
use crate::fetch::TranscriptClient;
use crate::scrape;
use serde_json::Value;

/// One video entry of a playlist.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaylistEntry {
    pub video_id: String,
    pub title: String,
}

impl PlaylistEntry {
    /// Canonical watch URL for this entry.
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

impl TranscriptClient {
    /// List the entries of a playlist page, in playlist order.
    pub fn playlist_entries(&self, playlist_url: &str) -> Result<Vec<PlaylistEntry>> {
        tracing::debug!(url = playlist_url, "fetching playlist page");
        let html = self.get_text(playlist_url)?;

        let data = scrape::json_after(&html, "ytInitialData")
            .ok_or_else(|| Error::EmptyPlaylist(playlist_url.to_string()))?;

        let mut entries = Vec::new();
        collect_entries(&data, &mut entries);

        if entries.is_empty() {
            return Err(Error::EmptyPlaylist(playlist_url.to_string()));
        }
        Ok(entries)
    }
}

/// Walk the initial data tree collecting `playlistVideoRenderer` nodes.
fn collect_entries(value: &Value, out: &mut Vec<PlaylistEntry>) {
    match value {
        Value::Object(map) => {
            if let Some(renderer) = map.get("playlistVideoRenderer") {
                if let Some(entry) = entry_from_renderer(renderer) {
                    out.push(entry);
                }
            }
            for child in map.values() {
                collect_entries(child, out);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_entries(child, out);
            }
        }
        _ => {}
    }
}

fn entry_from_renderer(renderer: &Value) -> Option<PlaylistEntry> {
    let video_id = renderer.get("videoId")?.as_str()?.to_string();
    let title = renderer
        .pointer("/title/runs/0/text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(PlaylistEntry { video_id, title })
}
