//! Word segmentation and casing conversion algorithms
//!
//! This crate implements the casing core: a word-boundary segmenter that
//! splits identifiers and phrases into tokens, the five casing conversions
//! built on top of it, and a name-aware caser that applies per-word
//! classification rules (particles, Roman numerals, Mc/Mac prefixes,
//! hyphen- and apostrophe-joined segments).
//!
//! Every function is a pure, total function of its input: no shared state,
//! no I/O, no locale lookups. Case mapping goes through
//! [`char::to_uppercase`] and [`char::to_lowercase`], which do not consult
//! the runtime locale, so output is identical on every platform.
//!
//! # Example
//!
//! ```rust
//! use strkit_core::{segment_words, to_name_case, to_snake_case};
//!
//! assert_eq!(segment_words("helloWorld"), vec!["hello", "World"]);
//! assert_eq!(to_snake_case("helloWorld"), "hello_world");
//! assert_eq!(to_name_case("jean-claude van damme"), "Jean-Claude van Damme");
//! ```

#![warn(missing_docs)]

pub mod casing;
pub mod namecase;
pub mod segmenter;
pub mod tables;

pub use casing::{
    to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case, to_snake_case,
};
pub use namecase::{classify, to_name_case, TokenClass};
pub use segmenter::segment_words;
pub use tables::{is_name_particle, is_roman_numeral, NAME_PARTICLES};
