//! JSON string-literal codec
//!
//! `encode`/`decode` operate on the *content* of a JSON string literal
//! (between the quotes): short escapes for the usual control characters,
//! `\uXXXX` for the rest, surrogate pairs for astral code points on the
//! way in. `is_json` checks whole-document validity via `serde_json`.

use crate::error::{FormatError, Result};

/// Escapes `text` for use inside a JSON string literal.
pub fn encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\u{0008}' => result.push_str("\\b"),
            '\u{000C}' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            other => result.push(other),
        }
    }
    result
}

/// Resolves JSON string-literal escapes in `text`.
///
/// Handles the short escapes, `\uXXXX` units, and surrogate pairs. A
/// trailing backslash, unknown escape letter, bad hex digits, or a lone
/// surrogate is a [`FormatError::Escape`].
pub fn decode(text: &str) -> Result<String> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((position, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let (_, escape) = chars.next().ok_or(FormatError::Escape { position })?;
        match escape {
            '"' => result.push('"'),
            '\\' => result.push('\\'),
            '/' => result.push('/'),
            'b' => result.push('\u{0008}'),
            'f' => result.push('\u{000C}'),
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'u' => result.push(decode_unicode_escape(&mut chars, position)?),
            _ => return Err(FormatError::Escape { position }),
        }
    }

    Ok(result)
}

/// Whether `text` is a complete, valid JSON document.
pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

fn decode_unicode_escape(chars: &mut std::str::CharIndices<'_>, position: usize) -> Result<char> {
    let unit = read_hex4(chars, position)?;

    // High surrogate: a \uXXXX low surrogate must follow.
    if (0xD800..0xDC00).contains(&unit) {
        match (chars.next(), chars.next()) {
            (Some((_, '\\')), Some((_, 'u'))) => {}
            _ => return Err(FormatError::Escape { position }),
        }
        let low = read_hex4(chars, position)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(FormatError::Escape { position });
        }
        let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code).ok_or(FormatError::Escape { position });
    }

    // Lone low surrogates fall out here: from_u32 rejects them.
    char::from_u32(unit).ok_or(FormatError::Escape { position })
}

fn read_hex4(chars: &mut std::str::CharIndices<'_>, position: usize) -> Result<u32> {
    let mut value = 0u32;
    for _ in 0..4 {
        let (_, digit) = chars.next().ok_or(FormatError::Escape { position })?;
        let parsed = digit.to_digit(16).ok_or(FormatError::Escape { position })?;
        value = value * 16 + parsed;
    }
    Ok(value)
}
