//! Hex codec (lowercase digits over UTF-8 bytes)

use super::{hex_value, HEX_LOWER};
use crate::error::{FormatError, Result};

/// Encodes the UTF-8 bytes of `text` as lowercase hex digits.
pub fn encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        result.push(HEX_LOWER[(byte >> 4) as usize] as char);
        result.push(HEX_LOWER[(byte & 0x0F) as usize] as char);
    }
    result
}

/// Decodes a hex digit string back into text.
///
/// Accepts both digit cases; fails on odd length, non-hex digits, or a
/// byte sequence that is not valid UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    let raw = encoded.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(FormatError::OddHexLength { len: raw.len() });
    }

    let mut bytes = Vec::with_capacity(raw.len() / 2);
    for (pair_index, pair) in raw.chunks_exact(2).enumerate() {
        let hi = hex_value(pair[0]).ok_or(FormatError::HexDigit {
            position: pair_index * 2,
        })?;
        let lo = hex_value(pair[1]).ok_or(FormatError::HexDigit {
            position: pair_index * 2 + 1,
        })?;
        bytes.push((hi << 4) | lo);
    }

    String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let original = "hex? ✓";
        assert_eq!(decode(&encode(original)).unwrap(), original);
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(encode("AB"), "4142");
        assert_eq!(decode("4142").unwrap(), "AB");
        assert_eq!(decode("4A4b").unwrap(), "JK");
    }

    #[test]
    fn test_odd_length_fails() {
        assert_eq!(decode("414"), Err(FormatError::OddHexLength { len: 3 }));
    }

    #[test]
    fn test_bad_digit_position_reported() {
        assert_eq!(decode("41zz"), Err(FormatError::HexDigit { position: 2 }));
        assert_eq!(decode("4g"), Err(FormatError::HexDigit { position: 1 }));
    }

    #[test]
    fn test_non_utf8_bytes_fail() {
        assert_eq!(decode("fffe"), Err(FormatError::InvalidUtf8));
    }
}
