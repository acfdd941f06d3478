//! Top-level error type

use strkit_text::FormatError;
use thiserror::Error;

/// Errors surfaced at the crate boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A codec `decode` received malformed input
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// A case style code did not name a known style
    #[error("unknown case style '{code}'")]
    UnknownStyle {
        /// The code that failed to parse
        code: String,
    },
}

/// Result type for strkit operations
pub type Result<T> = std::result::Result<T, Error>;
