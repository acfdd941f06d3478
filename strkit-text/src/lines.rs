//! Line-ending conversion
//!
//! Both conversions normalize any mix of `\r\n`, `\r`, and `\n` first,
//! so they are safe on files with inconsistent endings and idempotent.

/// Converts all line endings in `text` to `\n`.
pub fn to_unix_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Converts all line endings in `text` to `\r\n`.
pub fn to_windows_line_endings(text: &str) -> String {
    to_unix_line_endings(text).replace('\n', "\r\n")
}
