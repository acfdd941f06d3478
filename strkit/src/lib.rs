//! Pure string transformations
//!
//! This crate is the public face of the strkit workspace: casing
//! conversions and name-aware casing from [`strkit_core`], plus the
//! counting, extraction, manipulation, and codec utilities from
//! [`strkit_text`]. Every function is a stateless, deterministic
//! function of its input — no I/O, no shared state, no locale lookups.
//!
//! # Example
//!
//! ```rust
//! use strkit::{convert, CaseStyle, to_name_case};
//!
//! assert_eq!(convert(CaseStyle::Snake, "helloWorld"), "hello_world");
//! assert_eq!(to_name_case("conan o'brien"), "Conan O'Brien");
//! ```

#![warn(missing_docs)]

pub mod error;
mod style;

// Casing core
pub use strkit_core::{
    classify, segment_words, to_camel_case, to_kebab_case, to_name_case, to_pascal_case,
    to_screaming_snake_case, to_snake_case, TokenClass,
};

// Utility layer
pub use strkit_text::{codec, count, extract, lines, manipulate, substring, FormatError};

pub use error::{Error, Result};
pub use style::{convert, CaseStyle};
