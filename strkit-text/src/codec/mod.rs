//! Encode/decode pairs for text formats
//!
//! Each submodule exposes an `encode` function that never fails and a
//! `decode` function returning [`FormatError`](crate::FormatError) on
//! malformed input. Shared nibble helpers live here; entity resolution
//! shared by the HTML and XML codecs lives in [`html`].

pub mod base64;
pub mod csv;
pub mod hexcode;
pub mod html;
pub mod json;
pub mod url;
pub mod xml;

pub(crate) const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
pub(crate) const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

pub(crate) fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
