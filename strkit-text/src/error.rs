//! Format errors for codec decoding

use thiserror::Error;

/// Errors raised when a `decode` function receives malformed input.
///
/// Encoding never fails; decoding fails fast with the position of the
/// first offending byte where one can be named. There are no retries and
/// no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Base64 payload could not be decoded
    #[error("invalid base64: {0}")]
    Base64(String),

    /// Hex input has an odd number of digits
    #[error("hex input has odd length {len}")]
    OddHexLength {
        /// Length of the offending input in bytes
        len: usize,
    },

    /// Non-hex digit in hex input
    #[error("invalid hex digit at byte {position}")]
    HexDigit {
        /// Byte offset of the offending digit
        position: usize,
    },

    /// Truncated or non-hex `%XX` escape in percent-encoded input
    #[error("invalid percent-encoding at byte {position}")]
    PercentEncoding {
        /// Byte offset of the `%` that starts the bad escape
        position: usize,
    },

    /// Unterminated, unknown, or out-of-range entity reference
    #[error("malformed entity reference at byte {position}")]
    Entity {
        /// Byte offset of the `&` that starts the bad reference
        position: usize,
    },

    /// Invalid backslash escape in a JSON string literal
    #[error("invalid escape sequence at byte {position}")]
    Escape {
        /// Byte offset of the backslash that starts the bad escape
        position: usize,
    },

    /// Structurally malformed CSV
    #[error("malformed CSV: {reason}")]
    Csv {
        /// What the parser found wrong
        reason: String,
    },

    /// Decoded bytes are not valid UTF-8
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, FormatError>;
