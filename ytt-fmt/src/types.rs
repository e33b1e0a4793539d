//! Core transcript types.

use serde::{Deserialize, Serialize};

/// Fallback cue length when a segment has no duration and no successor.
pub const DEFAULT_CUE_SECS: f64 = 2.0;

/// Timed text unit produced by the transcript source.
///
/// `duration` is optional because the timedtext payload may omit it for an
/// event; it serializes as an explicit `null` in that case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Caption text
    pub text: String,
    /// Start offset in seconds
    pub start: f64,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, duration: Option<f64>) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// End time of this segment rendered as a cue.
    ///
    /// Explicit duration wins, otherwise the next segment's start, otherwise
    /// a fixed fallback window.
    pub fn cue_end(&self, next_start: Option<f64>) -> f64 {
        match self.duration {
            Some(duration) => self.start + duration,
            None => next_start.unwrap_or(self.start + DEFAULT_CUE_SECS),
        }
    }
}

/// Iterate segments paired with the start of their successor.
pub fn with_next_start(segments: &[Segment]) -> impl Iterator<Item = (&Segment, Option<f64>)> {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| (segment, segments.get(i + 1).map(|next| next.start)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_end_prefers_duration() {
        let segment = Segment::new("a", 10.0, Some(1.5));
        assert!((segment.cue_end(Some(20.0)) - 11.5).abs() < 1e-9);
    }

    #[test]
    fn cue_end_falls_back_to_next_start() {
        let segment = Segment::new("a", 10.0, None);
        assert!((segment.cue_end(Some(12.25)) - 12.25).abs() < 1e-9);
    }

    #[test]
    fn cue_end_uses_default_window_at_tail() {
        let segment = Segment::new("a", 10.0, None);
        assert!((segment.cue_end(None) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn pairs_segments_with_successor_starts() {
        let segments = vec![
            Segment::new("a", 0.0, Some(1.0)),
            Segment::new("b", 1.0, None),
        ];

        let pairs: Vec<_> = with_next_start(&segments).collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1, Some(1.0));
        assert_eq!(pairs[1].1, None);
    }

    #[test]
    fn missing_duration_deserializes_as_none() {
        let segment: Segment = serde_json::from_str(r#"{"text":"hi","start":4.2}"#).unwrap();
        assert_eq!(segment, Segment::new("hi", 4.2, None));
    }
}
