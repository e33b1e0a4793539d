//! Timestamp rendering for subtitle formats.
//!
//! Both SRT and WebVTT use `HH:MM:SS` with millisecond precision; they only
//! differ in the separator before the milliseconds.

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`).
pub fn srt(secs: f64) -> String {
    stamp(secs, ',')
}

/// Format seconds as a WebVTT timestamp (`HH:MM:SS.mmm`).
pub fn vtt(secs: f64) -> String {
    stamp(secs, '.')
}

fn stamp(secs: f64, sep: char) -> String {
    let total_ms = (secs.max(0.0) * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let hh = total_secs / 3600;
    let mm = (total_secs % 3600) / 60;
    let ss = total_secs % 60;
    format!("{hh:02}:{mm:02}:{ss:02}{sep}{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(srt(0.0), "00:00:00,000");
        assert_eq!(vtt(0.0), "00:00:00.000");
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(srt(3661.5), "01:01:01,500");
        assert_eq!(vtt(3661.5), "01:01:01.500");
    }

    #[test]
    fn rounds_to_nearest_millisecond() {
        assert_eq!(vtt(1.0006), "00:00:01.001");
        assert_eq!(vtt(1.0004), "00:00:01.000");
    }

    #[test]
    fn clamps_negative_to_zero() {
        assert_eq!(srt(-0.5), "00:00:00,000");
    }
}
