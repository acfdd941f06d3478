//! Casing assembly functions
//!
//! Each conversion composes [`segment_words`](crate::segment_words) with a
//! per-token capitalization rule and a joiner. All functions are pure and
//! total: the empty string maps to the empty string, and separators in
//! the input are fully consumed.

use crate::segmenter::segment_words;

/// Converts `text` to PascalCase: every token capitalized, no joiner.
///
/// ```
/// assert_eq!(strkit_core::to_pascal_case("hello world"), "HelloWorld");
/// ```
pub fn to_pascal_case(text: &str) -> String {
    segment_words(text)
        .iter()
        .map(|word| capitalize(word))
        .collect()
}

/// Converts `text` to camelCase: PascalCase with the first letter of the
/// whole result lowercased.
///
/// ```
/// assert_eq!(strkit_core::to_camel_case("HelloWorld"), "helloWorld");
/// ```
pub fn to_camel_case(text: &str) -> String {
    let pascal = to_pascal_case(text);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut result: String = first.to_lowercase().collect();
            result.push_str(chars.as_str());
            result
        }
        None => pascal,
    }
}

/// Converts `text` to kebab-case: every token lowercased, joined with `-`.
pub fn to_kebab_case(text: &str) -> String {
    join_mapped(text, "-", str::to_lowercase)
}

/// Converts `text` to snake_case: every token lowercased, joined with `_`.
pub fn to_snake_case(text: &str) -> String {
    join_mapped(text, "_", str::to_lowercase)
}

/// Converts `text` to SCREAMING_SNAKE_CASE: every token uppercased,
/// joined with `_`.
pub fn to_screaming_snake_case(text: &str) -> String {
    join_mapped(text, "_", str::to_uppercase)
}

fn join_mapped(text: &str, joiner: &str, map: impl Fn(&str) -> String) -> String {
    let words = segment_words(text);
    let mut result = String::with_capacity(text.len());
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            result.push_str(joiner);
        }
        result.push_str(&map(word));
    }
    result
}

/// Uppercases the first character of `segment` and lowercases the rest.
/// The empty segment is returned unchanged.
pub(crate) fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(segment.len());
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
            result
        }
        None => String::new(),
    }
}
