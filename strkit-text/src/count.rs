//! Counting functions
//!
//! All counts are over characters (Unicode scalar values), not bytes,
//! and every function returns 0 for the empty string.

use strkit_core::segment_words;

/// Number of characters in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of word tokens in `text`, as produced by the word segmenter
/// (so `"helloWorld"` counts 2).
pub fn word_count(text: &str) -> usize {
    segment_words(text).len()
}

/// Number of lines in `text`. A trailing newline does not open a new
/// line, matching [`str::lines`].
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}

/// Number of sentences in `text`: segments around `.`, `!`, `?` that
/// contain at least one alphanumeric character.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|part| part.chars().any(char::is_alphanumeric))
        .count()
}

/// Number of non-overlapping occurrences of `needle` in `text`.
/// An empty needle occurs zero times.
pub fn substring_count(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

/// Number of ASCII vowels in `text`, ignoring case.
pub fn vowel_count(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Number of ASCII consonants in `text`, ignoring case.
pub fn consonant_count(text: &str) -> usize {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_is_scalar_values() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("año"), 3);
    }

    #[test]
    fn test_word_count_uses_segmenter() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("helloWorld"), 2);
        assert_eq!(word_count("one-two_three"), 3);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("one line"), 1);
        assert_eq!(line_count("a\nb\nc"), 3);
        assert_eq!(line_count("a\nb\n"), 2);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("No terminator"), 1);
        assert_eq!(sentence_count("..."), 0);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn test_substring_count_non_overlapping() {
        assert_eq!(substring_count("aaaa", "aa"), 2);
        assert_eq!(substring_count("abcabc", "abc"), 2);
        assert_eq!(substring_count("abc", ""), 0);
        assert_eq!(substring_count("abc", "xyz"), 0);
    }

    #[test]
    fn test_vowels_and_consonants() {
        assert_eq!(vowel_count("Hello World"), 3);
        assert_eq!(consonant_count("Hello World"), 7);
        assert_eq!(vowel_count("xyz"), 0);
        assert_eq!(consonant_count("aeiou 123"), 0);
    }
}
