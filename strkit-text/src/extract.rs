//! Regex-based entity extraction
//!
//! Each function scans `text` for one entity kind and returns the
//! matches in order of appearance. The result is an empty vector, never
//! an error, when nothing matches. Patterns are compiled once per
//! process and cached in statics.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap()
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"']+"#).unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{1,3}[-. ]?\(?\d{2,4}\)?[-. ]?\d{3,4}[-. ]?\d{3,4}").unwrap()
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap()
});

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_]+").unwrap());

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_]+").unwrap());

/// Email addresses in `text`.
pub fn emails(text: &str) -> Vec<String> {
    matches_of(&EMAIL_RE, text)
}

/// HTTP and HTTPS URLs in `text`.
pub fn urls(text: &str) -> Vec<String> {
    matches_of(&URL_RE, text)
}

/// Phone numbers in `text` (international or separator-grouped forms).
pub fn phone_numbers(text: &str) -> Vec<String> {
    matches_of(&PHONE_RE, text)
}

/// Dates in `text`, ISO (`2024-01-31`) or slashed (`1/31/2024`) form.
pub fn dates(text: &str) -> Vec<String> {
    matches_of(&DATE_RE, text)
}

/// Hashtags in `text`, sigil included (`#rust`).
pub fn hashtags(text: &str) -> Vec<String> {
    matches_of(&HASHTAG_RE, text)
}

/// Mentions in `text`, sigil included (`@user`).
pub fn mentions(text: &str) -> Vec<String> {
    matches_of(&MENTION_RE, text)
}

fn matches_of(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
