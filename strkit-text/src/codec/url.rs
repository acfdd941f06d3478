//! URL percent-encoding codec (RFC 3986)
//!
//! Encoding leaves the unreserved set (`A-Z a-z 0-9 - . _ ~`) untouched
//! and percent-encodes every other byte of the UTF-8 form. Decoding is
//! strict RFC 3986: `+` is a literal plus, not a space.

use super::{hex_value, HEX_UPPER};
use crate::error::{FormatError, Result};

/// Percent-encodes `text`.
pub fn encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for byte in text.bytes() {
        if is_unreserved(byte) {
            result.push(byte as char);
        } else {
            result.push('%');
            result.push(HEX_UPPER[(byte >> 4) as usize] as char);
            result.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
        }
    }
    result
}

/// Decodes percent-encoded input.
///
/// Fails on a truncated or non-hex `%XX` escape, and when the decoded
/// byte sequence is not valid UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    let raw = encoded.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut at = 0;

    while at < raw.len() {
        if raw[at] == b'%' {
            let escape = raw
                .get(at + 1..at + 3)
                .ok_or(FormatError::PercentEncoding { position: at })?;
            let hi = hex_value(escape[0]).ok_or(FormatError::PercentEncoding { position: at })?;
            let lo = hex_value(escape[1]).ok_or(FormatError::PercentEncoding { position: at })?;
            bytes.push((hi << 4) | lo);
            at += 3;
        } else {
            bytes.push(raw[at]);
            at += 1;
        }
    }

    String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_passes_through() {
        assert_eq!(encode("AZaz09-._~"), "AZaz09-._~");
    }

    #[test]
    fn test_reserved_and_multibyte_encoded() {
        assert_eq!(encode("a b&c"), "a%20b%26c");
        assert_eq!(encode("café"), "caf%C3%A9");
    }

    #[test]
    fn test_round_trip() {
        let original = "q=hello world&lang=español/path?";
        assert_eq!(decode(&encode(original)).unwrap(), original);
    }

    #[test]
    fn test_plus_is_literal() {
        assert_eq!(decode("a+b").unwrap(), "a+b");
        assert_eq!(encode("a+b"), "a%2Bb");
    }

    #[test]
    fn test_truncated_escape_fails() {
        assert_eq!(decode("abc%4"), Err(FormatError::PercentEncoding { position: 3 }));
        assert_eq!(decode("%"), Err(FormatError::PercentEncoding { position: 0 }));
    }

    #[test]
    fn test_bad_escape_digit_fails() {
        assert_eq!(decode("%zz"), Err(FormatError::PercentEncoding { position: 0 }));
    }

    #[test]
    fn test_invalid_utf8_fails() {
        assert_eq!(decode("%FF"), Err(FormatError::InvalidUtf8));
    }
}
