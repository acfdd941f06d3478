//! Positional substring extraction
//!
//! `left`/`right`/`mid` are char-indexed and saturate at the string
//! bounds; `before`/`after`/`between` anchor on the first occurrence of
//! a marker and return `None` when the marker is absent.

/// First `n` characters of `text`.
pub fn left(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// Last `n` characters of `text`.
pub fn right(text: &str, n: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(n)).collect()
}

/// `len` characters of `text` starting at char index `start`.
pub fn mid(text: &str, start: usize, len: usize) -> String {
    text.chars().skip(start).take(len).collect()
}

/// Everything before the first occurrence of `marker`.
pub fn before(text: &str, marker: &str) -> Option<String> {
    text.find(marker).map(|at| text[..at].to_string())
}

/// Everything after the first occurrence of `marker`.
pub fn after(text: &str, marker: &str) -> Option<String> {
    text.find(marker)
        .map(|at| text[at + marker.len()..].to_string())
}

/// Everything between the first occurrence of `from` and the first
/// occurrence of `to` after it.
pub fn between(text: &str, from: &str, to: &str) -> Option<String> {
    let start = text.find(from)? + from.len();
    let end = text[start..].find(to)? + start;
    Some(text[start..end].to_string())
}
