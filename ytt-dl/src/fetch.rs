//! Transcript retrieval client.

use crate::error::{Error, Result};
use crate::scrape;
use crate::video::VideoId;
use serde::Deserialize;
use ytt_fmt::Segment;

/// Browser user agent; YouTube serves a reduced page to unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

const CAPTION_TRACKS_POINTER: &str =
    "/captions/playerCaptionsTracklistRenderer/captionTracks";

/// Blocking HTTP client for transcript retrieval.
pub struct TranscriptClient {
    http: reqwest::blocking::Client,
}

/// One caption track advertised by the player response.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// "asr" marks an auto-generated track
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// Whether this track was generated by speech recognition.
    pub fn is_asr(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: f64,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<f64>,
    #[serde(default)]
    segs: Vec<TextRun>,
}

#[derive(Debug, Deserialize)]
struct TextRun {
    #[serde(default)]
    utf8: String,
}

impl TranscriptClient {
    /// Create a client with browser headers.
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create a client routing all requests through an HTTP proxy.
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        Self::build(Some(proxy))
    }

    fn build(proxy: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);

        if let Some(proxy) = proxy {
            // bare host:port proxies are accepted
            let proxy = if proxy.starts_with("http://") || proxy.starts_with("https://") {
                proxy.to_string()
            } else {
                format!("http://{proxy}")
            };
            builder = builder.proxy(reqwest::Proxy::all(&proxy)?);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Fetch the transcript for a watch URL.
    pub fn fetch_url(&self, url: &str, language: Option<&str>) -> Result<Vec<Segment>> {
        let video_id = crate::video::extract_video_id(url)?;
        self.fetch(&video_id, language)
    }

    /// Fetch the transcript for a video, preferring `language` when given.
    pub fn fetch(&self, video_id: &VideoId, language: Option<&str>) -> Result<Vec<Segment>> {
        let tracks = self.caption_tracks(video_id)?;

        let track = select_track(&tracks, language).ok_or_else(|| match language {
            Some(lang) => Error::LanguageNotFound {
                lang: lang.to_string(),
                available: available_codes(&tracks),
            },
            None => Error::NoCaptions(video_id.to_string()),
        })?;

        tracing::debug!(
            language = %track.language_code,
            asr = track.is_asr(),
            "selected caption track"
        );

        self.fetch_track(track)
    }

    /// List the caption tracks advertised for a video.
    pub fn caption_tracks(&self, video_id: &VideoId) -> Result<Vec<CaptionTrack>> {
        let url = format!("{WATCH_URL}{video_id}");
        tracing::debug!(%url, "fetching watch page");
        let html = self.get_text(&url)?;

        let player = scrape::json_after(&html, "ytInitialPlayerResponse")
            .ok_or_else(|| Error::MissingPlayerData(video_id.to_string()))?;

        let tracks = player
            .pointer(CAPTION_TRACKS_POINTER)
            .cloned()
            .map(serde_json::from_value::<Vec<CaptionTrack>>)
            .transpose()?
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(Error::NoCaptions(video_id.to_string()));
        }
        Ok(tracks)
    }

    /// Download one track as json3 and convert to segments.
    fn fetch_track(&self, track: &CaptionTrack) -> Result<Vec<Segment>> {
        let url = format!("{}&fmt=json3", track.base_url);
        tracing::debug!(language = %track.language_code, "fetching timedtext");

        let timed: TimedText = self
            .http
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(to_segments(timed))
    }

    pub(crate) fn get_text(&self, url: &str) -> Result<String> {
        Ok(self.http.get(url).send()?.error_for_status()?.text()?)
    }
}

/// Pick a track: exact language match (manual preferred over asr), else the
/// first manual track, else the first track.
fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    language: Option<&str>,
) -> Option<&'a CaptionTrack> {
    match language {
        Some(lang) => tracks
            .iter()
            .find(|track| track.language_code == lang && !track.is_asr())
            .or_else(|| tracks.iter().find(|track| track.language_code == lang)),
        None => tracks
            .iter()
            .find(|track| !track.is_asr())
            .or_else(|| tracks.first()),
    }
}

fn available_codes(tracks: &[CaptionTrack]) -> String {
    let mut codes: Vec<&str> = Vec::new();
    for track in tracks {
        let code = track.language_code.as_str();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes.join(", ")
}

/// Flatten json3 events into segments, dropping the empty ones.
fn to_segments(timed: TimedText) -> Vec<Segment> {
    timed
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event
                .segs
                .iter()
                .map(|run| run.utf8.as_str())
                .collect::<String>()
                .replace('\n', " ");
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(Segment::new(
                text,
                event.start_ms / 1000.0,
                event.duration_ms.map(|d| d / 1000.0),
            ))
        })
        .collect()
}
