//! CSV codec (RFC 4180 quoting, single records)
//!
//! `encode_field`/`decode_field` handle one field; `encode_record`/
//! `decode_record` handle one comma-separated record. Record boundaries
//! (newlines between records) are the caller's concern.

use crate::error::{FormatError, Result};

/// Quotes `field` if it contains a comma, quote, or line break;
/// otherwise returns it unchanged.
pub fn encode_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        let mut result = String::with_capacity(field.len() + 2);
        result.push('"');
        for c in field.chars() {
            if c == '"' {
                result.push('"');
            }
            result.push(c);
        }
        result.push('"');
        result
    } else {
        field.to_string()
    }
}

/// Parses one encoded field.
///
/// A quoted field must be fully quoted with `""` for literal quotes; an
/// unquoted field must not contain a quote at all.
pub fn decode_field(field: &str) -> Result<String> {
    if !field.starts_with('"') {
        if field.contains('"') {
            return Err(FormatError::Csv {
                reason: "bare quote in unquoted field".to_string(),
            });
        }
        return Ok(field.to_string());
    }

    let mut result = String::with_capacity(field.len());
    let mut chars = field[1..].chars().peekable();
    loop {
        match chars.next() {
            None => {
                return Err(FormatError::Csv {
                    reason: "unterminated quoted field".to_string(),
                })
            }
            Some('"') => match chars.next() {
                Some('"') => result.push('"'),
                None => return Ok(result),
                Some(_) => {
                    return Err(FormatError::Csv {
                        reason: "data after closing quote".to_string(),
                    })
                }
            },
            Some(c) => result.push(c),
        }
    }
}

/// Encodes `fields` as one comma-separated record.
pub fn encode_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| encode_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses one comma-separated record into its fields.
///
/// Commas inside quoted fields do not split; `""` inside a quoted field
/// is a literal quote. Fails on an unterminated quoted field, a quote
/// opening mid-field, or data after a closing quote.
pub fn decode_record(record: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = record.chars().peekable();
    let mut in_quotes = false;
    // Set after a quoted field closes; only a comma may follow.
    let mut just_closed = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                    just_closed = true;
                }
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            ',' => {
                fields.push(std::mem::take(&mut current));
                just_closed = false;
            }
            _ if just_closed => {
                return Err(FormatError::Csv {
                    reason: "data after closing quote".to_string(),
                })
            }
            '"' if current.is_empty() => in_quotes = true,
            '"' => {
                return Err(FormatError::Csv {
                    reason: "quote opened mid-field".to_string(),
                })
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(FormatError::Csv {
            reason: "unterminated quoted field".to_string(),
        });
    }
    fields.push(current);
    Ok(fields)
}
