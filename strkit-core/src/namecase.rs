//! Name-aware casing
//!
//! Capitalizes personal names word by word: particles stay lowercase,
//! Roman numeral suffixes go uppercase, Mc/Mac prefixes keep an inner
//! capital, and hyphen- or apostrophe-joined words are capitalized on
//! each side of the joiner.
//!
//! Tokenization here is a plain whitespace split, not the word segmenter:
//! particle and prefix detection operates on whole words, so sub-word
//! case transitions must not break words apart.

use crate::casing::capitalize;
use crate::tables::{is_name_particle, is_roman_numeral};

/// Classification of a whitespace-delimited name word.
///
/// Variants are mutually exclusive and checked in this order: particle
/// first, then Roman numeral, then the structural checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// A connector word such as "von" or "de"; emitted lowercase.
    Particle,
    /// A well-formed Roman numeral such as "VIII"; emitted uppercase.
    RomanNumeral,
    /// Starts with "mc" and has more than two characters.
    McPrefixed,
    /// Starts with "mac" and has more than three characters.
    MacPrefixed,
    /// Contains a hyphen; each piece is transformed independently.
    Hyphenated,
    /// Contains exactly one apostrophe; both sides are capitalized.
    Apostrophed,
    /// Any other word; capitalized with the remainder lowercased.
    Plain,
}

/// Classifies a single name word.
pub fn classify(word: &str) -> TokenClass {
    if is_name_particle(word) {
        TokenClass::Particle
    } else if is_roman_numeral(word) && !word.eq_ignore_ascii_case("mc") {
        // "MC" is the numeral 1100, but as a name word it is always the
        // bare Mc prefix and takes the default capitalization.
        TokenClass::RomanNumeral
    } else {
        structural_class(word)
    }
}

/// Converts `text` to name case.
///
/// Words are split at whitespace runs, transformed in order, and rejoined
/// with single spaces. Word count and intra-word hyphens/apostrophes are
/// preserved; only capitalization changes.
///
/// ```
/// use strkit_core::to_name_case;
///
/// assert_eq!(to_name_case("o'brien"), "O'Brien");
/// assert_eq!(to_name_case("mcdonald"), "McDonald");
/// assert_eq!(to_name_case("henry viii"), "Henry VIII");
/// assert_eq!(to_name_case("VON NEUMANN"), "von Neumann");
/// ```
pub fn to_name_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (index, word) in text.split_whitespace().enumerate() {
        if index > 0 {
            result.push(' ');
        }
        result.push_str(&transform_word(word));
    }
    result
}

fn transform_word(word: &str) -> String {
    match classify(word) {
        TokenClass::Particle => word.to_lowercase(),
        TokenClass::RomanNumeral => word.to_uppercase(),
        _ => shape_word(word),
    }
}

// Structural checks only; particles and numerals are whole-word
// properties and never apply below this point.
fn structural_class(word: &str) -> TokenClass {
    if word.contains('-') {
        TokenClass::Hyphenated
    } else if word.matches('\'').count() == 1 {
        TokenClass::Apostrophed
    } else if has_prefix(word, b"mc") && word.len() > 2 {
        TokenClass::McPrefixed
    } else if has_prefix(word, b"mac") && word.len() > 3 {
        TokenClass::MacPrefixed
    } else {
        // Multi-apostrophe words land here: the apostrophes are treated
        // as ordinary characters.
        TokenClass::Plain
    }
}

fn shape_word(word: &str) -> String {
    match structural_class(word) {
        TokenClass::Hyphenated => {
            let pieces: Vec<String> = word.split('-').map(shape_word).collect();
            pieces.join("-")
        }
        TokenClass::Apostrophed => match word.split_once('\'') {
            Some((head, tail)) => format!("{}'{}", capitalize(head), capitalize(tail)),
            None => capitalize(word),
        },
        // The prefix is ASCII, so slicing by byte length is safe.
        TokenClass::McPrefixed => format!("Mc{}", capitalize(&word[2..])),
        TokenClass::MacPrefixed => format!("Mac{}", capitalize(&word[3..])),
        _ => capitalize(word),
    }
}

fn has_prefix(word: &str, prefix: &[u8]) -> bool {
    word.len() >= prefix.len() && word.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix)
}
