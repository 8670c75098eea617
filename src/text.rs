//! Delimiter-based text utilities shared by the codec.
//!
//! Plain splitting uses [`str::split`] directly: it always yields at least
//! one segment (the whole input when the delimiter is absent) and preserves
//! an empty trailing segment, which is exactly what the wire format needs.
//! This module adds the two helpers the format uses on top of that:
//! an exactly-two-segments split and the tag/payload join.

use crate::error::{Error, Result};
use crate::grammar::TAG_SEP;

/// Splits `text` into exactly two segments around `delim`.
///
/// Any other segment count is a [`MalformedPayload`](Error::MalformedPayload)
/// error; callers use this wherever the format requires precisely two parts,
/// such as a scalar's `tag$payload` or a mapping entry's `key^value`.
///
/// # Examples
///
/// ```rust
/// use tagline::text::split_pair;
///
/// assert_eq!(split_pair("i$10", '$').unwrap(), ("i", "10"));
/// assert!(split_pair("a^b^c", '^').is_err());
/// assert!(split_pair("solo", '$').is_err());
/// ```
///
/// # Errors
///
/// Returns an error when `text` does not contain exactly one `delim`.
pub fn split_pair(text: &str, delim: char) -> Result<(&str, &str)> {
    let mut segments = text.split(delim);
    let left = segments.next().unwrap_or("");
    match (segments.next(), segments.next()) {
        (Some(right), None) => Ok((left, right)),
        _ => Err(Error::malformed_payload(format!(
            "expected exactly two {delim:?}-separated segments in {text:?}"
        ))),
    }
}

/// Joins a tag list and a payload into a self-describing value.
#[must_use]
pub fn tagged(tags: &str, payload: &str) -> String {
    let mut out = String::with_capacity(tags.len() + payload.len() + 1);
    out.push_str(tags);
    out.push(TAG_SEP);
    out.push_str(payload);
    out
}
