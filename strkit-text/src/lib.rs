//! Counting, extraction, manipulation, and codec utilities
//!
//! This crate is the utility layer over [`strkit_core`]: counting
//! functions, positional substring extraction, regex-based entity
//! extraction, string manipulation, line-ending normalization, and
//! encode/decode pairs for seven text formats (Base64, hex, URL, HTML,
//! XML, JSON string literals, CSV).
//!
//! Every function is pure and synchronous. The only failure mode is
//! [`FormatError`], raised by the `decode` half of a codec when its
//! input is malformed; everything else is total over any `&str`.

#![warn(missing_docs)]

pub mod codec;
pub mod count;
pub mod error;
pub mod extract;
pub mod lines;
pub mod manipulate;
pub mod substring;

pub use error::{FormatError, Result};
