//! Closed word tables for name classification
//!
//! Lookups are allocation-light and case-insensitive; the tables are fixed
//! at compile time.

/// Name particles: short connector words in compound names that are
/// conventionally never capitalized ("von Neumann", "de la Cruz").
pub const NAME_PARTICLES: &[&str] = &[
    "von", "van", "de", "del", "della", "di", "da", "le", "la", "der", "den", "dos", "das", "el",
];

/// Checks whether `word` is a name particle, ignoring case.
pub fn is_name_particle(word: &str) -> bool {
    NAME_PARTICLES
        .iter()
        .any(|particle| word.eq_ignore_ascii_case(particle))
}

/// Checks whether `word` is a well-formed Roman numeral, ignoring case.
///
/// This validates the full numeral grammar
/// `M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})` rather than
/// just the I/V/X/L/C/D/M character set, so ordinary words such as
/// "mix" or "livid" are rejected.
pub fn is_roman_numeral(word: &str) -> bool {
    if word.is_empty() || !word.is_ascii() {
        return false;
    }
    let upper = word.to_ascii_uppercase();
    let mut rest = upper.as_str();

    rest = strip_repeats(rest, "M", 3);
    rest = strip_place(rest, "C", "D", "M");
    rest = strip_place(rest, "X", "L", "C");
    rest = strip_place(rest, "I", "V", "X");
    rest.is_empty()
}

// At most `max` leading repetitions of `unit`.
fn strip_repeats<'a>(mut s: &'a str, unit: &str, max: usize) -> &'a str {
    let mut stripped = 0;
    while stripped < max {
        match s.strip_prefix(unit) {
            Some(remainder) => {
                s = remainder;
                stripped += 1;
            }
            None => break,
        }
    }
    s
}

// One place-value group: the subtractive forms (IX, IV) first, then an
// optional five-symbol followed by up to three units.
fn strip_place<'a>(s: &'a str, unit: &str, five: &str, ten: &str) -> &'a str {
    let nine = [unit, ten].concat();
    let four = [unit, five].concat();
    if let Some(remainder) = s.strip_prefix(nine.as_str()) {
        return remainder;
    }
    if let Some(remainder) = s.strip_prefix(four.as_str()) {
        return remainder;
    }
    let s = s.strip_prefix(five).unwrap_or(s);
    strip_repeats(s, unit, 3)
}
