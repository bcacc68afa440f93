// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Keep ASCII digits only. `"1 234 підписи"` → `"1234"`.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Vote count from noisy label text. Empty or unparsable (overflow) → 0.
pub fn parse_votes(s: &str) -> u64 {
    digits_only(s).parse().unwrap_or(0)
}

/// Drop a leading label phrase (e.g. "Дата оприлюднення:") and trim.
/// Text without the label comes back trimmed but otherwise unchanged.
pub fn strip_label(s: &str, label: &str) -> String {
    let t = s.trim();
    t.strip_prefix(label).unwrap_or(t).trim().to_string()
}

/// Last non-empty path segment of an href, ignoring query and fragment.
/// Scheme and host of an absolute href are never taken as a segment.
pub fn last_path_segment(href: &str) -> Option<&str> {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    let mut path = &href[..end];
    let authority = match path.split_once("://") {
        Some((_, rest)) => Some(rest),
        None => path.strip_prefix("//"),
    };
    if let Some(rest) = authority {
        path = rest.find('/').map_or("", |i| &rest[i..]);
    }
    path.trim_end_matches('/').rsplit('/').next().filter(|seg| !seg.is_empty())
}

/// Treat whitespace-only text as absent.
pub fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
