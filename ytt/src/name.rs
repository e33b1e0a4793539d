//! Output filename policy.

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use ytt_fmt::OutputFormat;

/// Sanitize a user-supplied filename.
///
/// Strips surrounding whitespace, turns path separators into `_`, and
/// replaces everything outside `[A-Za-z0-9._\- ]` with `_`.
pub fn safe_filename(name: &str) -> String {
    static ILLEGAL: OnceLock<Regex> = OnceLock::new();
    let illegal = ILLEGAL.get_or_init(|| Regex::new(r"[^A-Za-z0-9._\-\s]").expect("static pattern"));

    let name = name.trim().replace(['/', '\\'], "_");
    illegal.replace_all(&name, "_").into_owned()
}

/// Default output name for a video transcript.
pub fn default_name(video_id: &str, format: OutputFormat) -> String {
    format!("{video_id}_transcript.{}", format.extension())
}

/// Append the format extension when the name does not already carry it.
pub fn with_format_extension(path: PathBuf, format: OutputFormat) -> PathBuf {
    let ext = format.extension();
    let already = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false);

    if already {
        path
    } else {
        // keep the requested name intact and add the extension on top
        let mut name = path.into_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }
}

/// Expand a playlist filename template.
///
/// Placeholders: `{index}` (1-based), `{video_id}`, `{title}` (sanitized),
/// `{ext}`. Without a template the default transcript name is used.
pub fn apply_template(
    template: Option<&str>,
    index: usize,
    video_id: &str,
    title: &str,
    format: OutputFormat,
) -> String {
    let Some(template) = template else {
        return default_name(video_id, format);
    };

    let name = template
        .replace("{index}", &index.to_string())
        .replace("{video_id}", video_id)
        .replace("{title}", &safe_filename(title))
        .replace("{ext}", format.extension());

    let named = with_format_extension(PathBuf::from(safe_filename(&name)), format);
    named.to_string_lossy().into_owned()
}
