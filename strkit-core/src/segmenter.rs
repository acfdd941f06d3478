//! Word-boundary segmentation
//!
//! Splits a string into word tokens at whitespace, hyphens, underscores,
//! and lower-to-upper case transitions. This is the shared front end of
//! every casing conversion in the crate.

/// Splits `text` into word tokens.
///
/// Whitespace, `-`, and `_` are hard separators: they close the current
/// token and are discarded. A lowercase letter immediately followed by an
/// uppercase letter also closes the current token, so `"helloWorld"`
/// yields `["hello", "World"]`. Empty runs between separators produce no
/// token, and any string (including the empty string or one made only of
/// separators) is valid input.
pub fn segment_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Last character pushed into `current`; reset at separators so a
    // case transition never fires across a token boundary.
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase()) {
            words.push(std::mem::take(&mut current));
        }

        current.push(ch);
        prev = Some(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
