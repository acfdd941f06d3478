//! Base64 codec (RFC 4648 standard alphabet, padded)

use crate::error::{FormatError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encodes the UTF-8 bytes of `text` as base64.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes a base64 payload back into a string.
///
/// Fails on invalid symbols, bad padding, or when the decoded bytes are
/// not valid UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| FormatError::Base64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)
}
