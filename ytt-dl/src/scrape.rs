//! Embedded JSON extraction from YouTube HTML pages.
//!
//! Watch and playlist pages embed their data as large JSON objects assigned
//! to script variables (`ytInitialPlayerResponse`, `ytInitialData`).

use serde_json::Value;

/// Find the JSON object following `marker` and parse it.
///
/// Scans from the first `{` after the marker with brace depth tracking that
/// is aware of string literals and escapes, so braces inside caption text do
/// not break the cut.
pub fn json_after(html: &str, marker: &str) -> Option<Value> {
    let at = html.find(marker)?;
    let rest = &html[at + marker.len()..];
    let open = rest.find('{')?;
    let body = balanced_object(&rest[open..])?;
    serde_json::from_str(body).ok()
}

/// Return the prefix of `s` holding one balanced `{...}` object.
fn balanced_object(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_after_marker() {
        let html = r#"<script>var ytInitialPlayerResponse = {"a": 1};</script>"#;
        let value = json_after(html, "ytInitialPlayerResponse").unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn handles_nested_objects() {
        let html = r#"ytInitialData = {"outer": {"inner": [1, 2]}};"#;
        let value = json_after(html, "ytInitialData").unwrap();
        assert_eq!(value["outer"]["inner"][1], 2);
    }

    #[test]
    fn braces_inside_strings_do_not_cut_early() {
        let html = r#"marker = {"text": "a } b \" c {"};"#;
        let value = json_after(html, "marker").unwrap();
        assert_eq!(value["text"], "a } b \" c {");
    }

    #[test]
    fn missing_marker_yields_none() {
        assert!(json_after("<html></html>", "ytInitialData").is_none());
    }

    #[test]
    fn unbalanced_object_yields_none() {
        assert!(json_after(r#"marker = {"a": 1"#, "marker").is_none());
    }
}
