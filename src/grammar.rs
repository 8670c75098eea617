//! Type tags and delimiter constants for the tagline wire format.
//!
//! Every encoded value starts with a short tag identifying its shape, so a
//! decoder can validate and parse it without an external schema. This module
//! defines the closed tag set and the four reserved separator characters,
//! one per nesting level:
//!
//! | role                    | constant      | character |
//! |-------------------------|---------------|-----------|
//! | tag / payload separator | [`TAG_SEP`]   | `$`       |
//! | record field separator  | [`FIELD_SEP`] | `\|`      |
//! | element separator       | [`ELEM_SEP`]  | `^`       |
//! | mapping entry separator | [`ENTRY_SEP`] | `#`       |
//!
//! A payload must never contain a delimiter reserved for a *shallower*
//! nesting level than the one being emitted; the codec does not escape
//! field content, it documents this as a constraint on it.
//!
//! ## Examples
//!
//! ```rust
//! use tagline::Tag;
//!
//! assert_eq!(Tag::Int.as_str(), "i");
//! assert_eq!(Tag::from_str("v"), Some(Tag::Seq));
//! assert_eq!(Tag::Seq.long_name(), "Vector");
//! ```

/// Separates a type tag from its payload, and nested tag lists from each
/// other inside a composite header.
pub const TAG_SEP: char = '$';

/// Separates sibling encoded fields inside a record line.
pub const FIELD_SEP: char = '|';

/// Separates sibling sequence elements, the key/value tags in a composite
/// header, and the two halves of a mapping entry or pair payload.
pub const ELEM_SEP: char = '^';

/// Separates sibling key/value entries inside a mapping payload.
pub const ENTRY_SEP: char = '#';

/// The shape of an encoded value, as carried on the wire.
///
/// Exactly one tag exists per supported shape. Composite shapes
/// ([`Tag::Seq`], [`Tag::Map`], [`Tag::Pair`]) additionally carry nested
/// tags for their element types in the encoded header; see
/// [`Shape::header`](crate::Shape::header).
///
/// # Examples
///
/// ```rust
/// use tagline::Tag;
///
/// assert_eq!(Tag::Str.as_str(), "s");
/// assert_eq!(Tag::from_str("b"), Some(Tag::Bool));
/// assert_eq!(Tag::from_str("z"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Str,
    Int,
    Float,
    Bool,
    Seq,
    Map,
    Pair,
}

impl Tag {
    /// Returns the canonical one-character text of this tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Str => "s",
            Tag::Int => "i",
            Tag::Float => "f",
            Tag::Bool => "b",
            Tag::Seq => "v",
            Tag::Map => "m",
            Tag::Pair => "p",
        }
    }

    /// Parses tag text back into a [`Tag`], or `None` for unknown text.
    #[must_use]
    pub fn from_str(text: &str) -> Option<Tag> {
        match text {
            "s" => Some(Tag::Str),
            "i" => Some(Tag::Int),
            "f" => Some(Tag::Float),
            "b" => Some(Tag::Bool),
            "v" => Some(Tag::Seq),
            "m" => Some(Tag::Map),
            "p" => Some(Tag::Pair),
            _ => None,
        }
    }

    /// Returns the human-readable shape name used in error messages.
    #[must_use]
    pub const fn long_name(&self) -> &'static str {
        match self {
            Tag::Str => "String",
            Tag::Int => "Integral",
            Tag::Float => "Float",
            Tag::Bool => "Bool",
            Tag::Seq => "Vector",
            Tag::Map => "Map",
            Tag::Pair => "Pair",
        }
    }

    /// Resolves arbitrary tag text to a long name, falling back to
    /// `"Undefined"` for text outside the tag set.
    #[must_use]
    pub fn describe(text: &str) -> &'static str {
        match Tag::from_str(text) {
            Some(tag) => tag.long_name(),
            None => "Undefined",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_text() {
        for tag in [
            Tag::Str,
            Tag::Int,
            Tag::Float,
            Tag::Bool,
            Tag::Seq,
            Tag::Map,
            Tag::Pair,
        ] {
            assert_eq!(Tag::from_str(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_unknown_tag_text() {
        assert_eq!(Tag::from_str("x"), None);
        assert_eq!(Tag::from_str(""), None);
        assert_eq!(Tag::from_str("ss"), None);
        assert_eq!(Tag::describe("x"), "Undefined");
    }

    #[test]
    fn test_long_names() {
        assert_eq!(Tag::describe("s"), "String");
        assert_eq!(Tag::describe("i"), "Integral");
        assert_eq!(Tag::describe("m"), "Map");
    }

    #[test]
    fn test_delimiters_are_distinct() {
        let delims = [TAG_SEP, FIELD_SEP, ELEM_SEP, ENTRY_SEP];
        for (i, a) in delims.iter().enumerate() {
            for b in &delims[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
