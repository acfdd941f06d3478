//! String manipulation
//!
//! Reversal, shuffling, masking, truncation, word wrapping, and
//! whitespace squishing. Everything is char-indexed, so multibyte input
//! is never split mid-character. `shuffle` takes the random source as an
//! argument rather than reaching for a global generator, so callers (and
//! tests) control determinism.

use rand::seq::SliceRandom;
use rand::Rng;

/// Reverses `text` character by character.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Randomly permutes the characters of `text` using `rng`.
pub fn shuffle<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Replaces a run of characters with `mask_char`.
///
/// `index` is the char position where masking starts; a negative index
/// counts back from the end. `length` bounds the masked run, `None`
/// masks through to the end. Out-of-range positions saturate, so the
/// call never fails.
pub fn mask(text: &str, mask_char: char, index: isize, length: Option<usize>) -> String {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    let start = if index < 0 {
        total.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(total)
    };
    let end = match length {
        Some(len) => start.saturating_add(len).min(total),
        None => total,
    };

    chars
        .iter()
        .enumerate()
        .map(|(at, &c)| if at >= start && at < end { mask_char } else { c })
        .collect()
}

/// Truncates `text` to at most `max_chars` characters, appending
/// `ellipsis` when anything was cut.
pub fn truncate(text: &str, max_chars: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut result: String = text.chars().take(max_chars).collect();
    result.push_str(ellipsis);
    result
}

/// Greedily wraps `text` at `width` characters per line.
///
/// Existing whitespace is treated as soft: words are re-flowed and
/// joined with single spaces or newlines. A word longer than `width`
/// gets a line of its own rather than being split.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Trims `text` and collapses every inner whitespace run to one space.
pub fn squish(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (index, word) in text.split_whitespace().enumerate() {
        if index > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}
