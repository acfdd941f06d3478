//! HTML entity codec
//!
//! `encode` escapes the five characters with reserved meaning in HTML
//! (`& < > " '`); `unescape` resolves those named entities plus decimal
//! and hexadecimal character references, and rejects anything else.

use crate::error::{FormatError, Result};

/// Escapes HTML-reserved characters in `text`.
///
/// The apostrophe is emitted as `&#39;` (the named `&apos;` form is not
/// universally recognized in HTML).
pub fn encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            other => result.push(other),
        }
    }
    result
}

/// Resolves entity references in `text`.
///
/// Accepts the five named entities (`amp`, `lt`, `gt`, `quot`, `apos`)
/// and numeric references (`&#NNN;`, `&#xHH;`). A bare `&`, an
/// unterminated reference, an unknown name, or an out-of-range code
/// point is a [`FormatError::Entity`].
pub fn decode(text: &str) -> Result<String> {
    unescape_entities(text)
}

// Shared with the XML codec; the accepted reference set is identical.
pub(crate) fn unescape_entities(text: &str) -> Result<String> {
    let mut result = String::with_capacity(text.len());
    let mut at = 0;

    while let Some(offset) = text[at..].find('&') {
        let amp = at + offset;
        result.push_str(&text[at..amp]);
        let semi = text[amp..]
            .find(';')
            .map(|o| amp + o)
            .ok_or(FormatError::Entity { position: amp })?;
        let name = &text[amp + 1..semi];
        result.push(resolve_entity(name).ok_or(FormatError::Entity { position: amp })?);
        at = semi + 1;
    }
    result.push_str(&text[at..]);

    Ok(result)
}

fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex_digits) if !hex_digits.is_empty() => {
                    u32::from_str_radix(hex_digits, 16).ok()?
                }
                Some(_) => return None,
                None if !digits.is_empty() => digits.parse::<u32>().ok()?,
                None => return None,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(
            encode(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_round_trip() {
        let original = r#"5 < 6 & "quoted" isn't > 4"#;
        assert_eq!(decode(&encode(original)).unwrap(), original);
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(decode("&#65;&#x42;&#X43;").unwrap(), "ABC");
        assert_eq!(decode("&#233;").unwrap(), "é");
        assert_eq!(decode("&apos;").unwrap(), "'");
    }

    #[test]
    fn test_bare_ampersand_fails() {
        assert_eq!(decode("a & b"), Err(FormatError::Entity { position: 2 }));
    }

    #[test]
    fn test_unknown_entity_fails() {
        assert_eq!(decode("&nope;"), Err(FormatError::Entity { position: 0 }));
        assert_eq!(decode("&#;"), Err(FormatError::Entity { position: 0 }));
        assert_eq!(decode("&#x;"), Err(FormatError::Entity { position: 0 }));
    }

    #[test]
    fn test_out_of_range_code_point_fails() {
        // Surrogate range is not a valid char.
        assert_eq!(decode("&#xD800;"), Err(FormatError::Entity { position: 0 }));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(decode("no entities here").unwrap(), "no entities here");
        assert_eq!(encode("plain"), "plain");
    }
}
