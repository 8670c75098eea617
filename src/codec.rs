//! The value converter engine.
//!
//! [`Shape`] is a closed, recursive description of an encodable value: four
//! scalar shapes plus three composites that nest arbitrarily. Every shape
//! exposes the same two-level contract:
//!
//! - **raw**: [`encode_raw`](Shape::encode_raw) /
//!   [`decode_raw`](Shape::decode_raw) work on the bare payload, with no
//!   tag attached and no tag validation;
//! - **self-describing**: [`encode`](Shape::encode) /
//!   [`decode`](Shape::decode) wrap the raw form with the shape's full tag
//!   header, and decoding validates every declared tag against the expected
//!   shape before parsing anything.
//!
//! Composite converters recurse through the same contract, so a sequence of
//! pairs or a mapping of strings to integers decodes exactly like a scalar:
//! validate the header, then parse the payload with the inner shapes.
//!
//! ## Wire forms
//!
//! | shape        | self-describing form                          |
//! |--------------|-----------------------------------------------|
//! | string       | `s$hello`                                     |
//! | integer      | `i$42`                                        |
//! | float        | `f$1.5`                                       |
//! | boolean      | `b$+` / `b$-`                                 |
//! | sequence     | `v$i$1^2^3` (empty: `v$i$`)                   |
//! | mapping      | `m$s^i$alpha^1#beta^2`                        |
//! | pair         | `p$s^f$name^1.5`                              |
//!
//! ## Examples
//!
//! ```rust
//! use tagline::{Shape, Value};
//!
//! let shape = Shape::seq_of(Shape::Int);
//! let value = Value::Seq(vec![1.into(), 2.into(), 3.into()]);
//!
//! let text = shape.encode(&value).unwrap();
//! assert_eq!(text, "v$i$1^2^3");
//! assert_eq!(shape.decode(&text).unwrap(), value);
//! ```

use crate::error::{Error, Result};
use crate::grammar::{Tag, ELEM_SEP, ENTRY_SEP, TAG_SEP};
use crate::text::tagged;
use crate::value::Value;

/// The shape of a value, driving both encode and decode.
///
/// Scalars are leaves; [`Seq`](Shape::Seq), [`Map`](Shape::Map), and
/// [`Pair`](Shape::Pair) carry the shapes of their elements, so one
/// `Shape` fully describes an arbitrarily nested value.
///
/// # Examples
///
/// ```rust
/// use tagline::{Shape, Tag};
///
/// let shape = Shape::map_of(Shape::Str, Shape::Int);
/// assert_eq!(shape.tag(), Tag::Map);
/// assert_eq!(shape.header(), "m$s^i");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Str,
    Int,
    Float,
    Bool,
    Seq(Box<Shape>),
    Map(Box<Shape>, Box<Shape>),
    Pair(Box<Shape>, Box<Shape>),
}

impl Shape {
    /// Builds a sequence shape over `elem`.
    #[must_use]
    pub fn seq_of(elem: Shape) -> Shape {
        Shape::Seq(Box::new(elem))
    }

    /// Builds a mapping shape from `key` to `value`.
    #[must_use]
    pub fn map_of(key: Shape, value: Shape) -> Shape {
        Shape::Map(Box::new(key), Box::new(value))
    }

    /// Builds a pair shape over `a` and `b`.
    #[must_use]
    pub fn pair_of(a: Shape, b: Shape) -> Shape {
        Shape::Pair(Box::new(a), Box::new(b))
    }

    /// Returns the top-level tag of this shape, stable per shape.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Shape::Str => Tag::Str,
            Shape::Int => Tag::Int,
            Shape::Float => Tag::Float,
            Shape::Bool => Tag::Bool,
            Shape::Seq(_) => Tag::Seq,
            Shape::Map(_, _) => Tag::Map,
            Shape::Pair(_, _) => Tag::Pair,
        }
    }

    /// Renders the full tag header of this shape, nested tags included.
    ///
    /// Scalars render as their single tag; a sequence declares its element
    /// tags after its own, and mapping/pair declare both element tag lists
    /// joined by the element separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagline::Shape;
    ///
    /// assert_eq!(Shape::Int.header(), "i");
    /// assert_eq!(Shape::seq_of(Shape::Float).header(), "v$f");
    /// assert_eq!(Shape::pair_of(Shape::Str, Shape::Bool).header(), "p$s^b");
    /// ```
    #[must_use]
    pub fn header(&self) -> String {
        match self {
            Shape::Str | Shape::Int | Shape::Float | Shape::Bool => self.tag().as_str().to_string(),
            Shape::Seq(elem) => format!("{}{}{}", self.tag(), TAG_SEP, elem.header()),
            Shape::Map(key, value) | Shape::Pair(key, value) => format!(
                "{}{}{}{}{}",
                self.tag(),
                TAG_SEP,
                key.header(),
                ELEM_SEP,
                value.header()
            ),
        }
    }

    /// Renders a value of this shape as a bare payload, no tag attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when `value` does not match this
    /// shape, recursively for composite elements.
    pub fn encode_raw(&self, value: &Value) -> Result<String> {
        match (self, value) {
            (Shape::Str, Value::Str(s)) => Ok(s.clone()),
            (Shape::Int, Value::Int(i)) => Ok(i.to_string()),
            (Shape::Float, Value::Float(f)) => Ok(f.to_string()),
            (Shape::Bool, Value::Bool(b)) => Ok(if *b { "+" } else { "-" }.to_string()),
            (Shape::Seq(elem), Value::Seq(elems)) => {
                let parts: Result<Vec<String>> =
                    elems.iter().map(|e| elem.encode_raw(e)).collect();
                Ok(parts?.join(&ELEM_SEP.to_string()))
            }
            (Shape::Map(key, val), Value::Map(entries)) => {
                let parts: Result<Vec<String>> = entries
                    .iter()
                    .map(|(k, v)| {
                        Ok(format!(
                            "{}{}{}",
                            key.encode_raw(k)?,
                            ELEM_SEP,
                            val.encode_raw(v)?
                        ))
                    })
                    .collect();
                Ok(parts?.join(&ENTRY_SEP.to_string()))
            }
            (Shape::Pair(a, b), Value::Pair(x, y)) => Ok(format!(
                "{}{}{}",
                a.encode_raw(x)?,
                ELEM_SEP,
                b.encode_raw(y)?
            )),
            (shape, value) => Err(Error::TypeMismatch {
                found: value_tag(value).long_name().to_string(),
                expected: shape.tag().long_name().to_string(),
            }),
        }
    }

    /// Parses a bare payload as this shape, without tag validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] for unparseable scalar payloads
    /// and for composite entries with the wrong segment count.
    pub fn decode_raw(&self, payload: &str) -> Result<Value> {
        match self {
            Shape::Str => Ok(Value::Str(payload.to_string())),
            Shape::Int => payload.parse::<i64>().map(Value::Int).map_err(|_| {
                Error::malformed_payload(format!("invalid integer payload {payload:?}"))
            }),
            Shape::Float => payload.parse::<f64>().map(Value::Float).map_err(|_| {
                Error::malformed_payload(format!("invalid float payload {payload:?}"))
            }),
            Shape::Bool => match payload {
                "+" => Ok(Value::Bool(true)),
                "-" => Ok(Value::Bool(false)),
                other => Err(Error::malformed_payload(format!(
                    "invalid bool payload {other:?}, expected \"+\" or \"-\""
                ))),
            },
            Shape::Seq(elem) => {
                if payload.is_empty() {
                    return Ok(Value::Seq(Vec::new()));
                }
                let elems: Result<Vec<Value>> =
                    payload.split(ELEM_SEP).map(|p| elem.decode_raw(p)).collect();
                Ok(Value::Seq(elems?))
            }
            Shape::Map(key, val) => {
                let mut map = Value::Map(Vec::new());
                if payload.is_empty() {
                    return Ok(map);
                }
                for entry in payload.split(ENTRY_SEP) {
                    let (raw_key, raw_val) = crate::text::split_pair(entry, ELEM_SEP)?;
                    map.insert_entry(key.decode_raw(raw_key)?, val.decode_raw(raw_val)?);
                }
                Ok(map)
            }
            Shape::Pair(a, b) => {
                let (raw_a, raw_b) = crate::text::split_pair(payload, ELEM_SEP)?;
                Ok(Value::Pair(
                    Box::new(a.decode_raw(raw_a)?),
                    Box::new(b.decode_raw(raw_b)?),
                ))
            }
        }
    }

    /// Renders a value of this shape in self-describing form: the full tag
    /// header, the tag separator, then the raw payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagline::{Shape, Value};
    ///
    /// assert_eq!(Shape::Int.encode(&Value::Int(10)).unwrap(), "i$10");
    /// assert_eq!(Shape::Bool.encode(&Value::Bool(true)).unwrap(), "b$+");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when `value` does not match this
    /// shape.
    pub fn encode(&self, value: &Value) -> Result<String> {
        Ok(tagged(&self.header(), &self.encode_raw(value)?))
    }

    /// Parses a self-describing value, validating every declared tag
    /// against this shape before touching the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagline::{Error, Shape, Value};
    ///
    /// assert_eq!(Shape::Int.decode("i$20").unwrap(), Value::Int(20));
    ///
    /// let err = Shape::Int.decode("s$cat").unwrap_err();
    /// assert!(matches!(err, Error::TypeMismatch { .. }));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when a declared tag differs from the
    /// expected one (the error names both), and
    /// [`Error::MalformedPayload`] for missing separators or unparseable
    /// payloads.
    pub fn decode(&self, text: &str) -> Result<Value> {
        let (tag, rest) = split_tag(text)?;
        if tag != self.tag().as_str() {
            return Err(Error::type_mismatch(tag, self.tag()));
        }
        match self {
            Shape::Str | Shape::Int | Shape::Float | Shape::Bool => self.decode_raw(rest),
            Shape::Seq(elem) => {
                let payload = strip_header(rest, &elem.header()).ok_or_else(|| {
                    Error::type_mismatch(leading_tag(rest), elem.tag())
                })?;
                self.decode_raw(payload)
            }
            Shape::Map(key, val) | Shape::Pair(key, val) => {
                let key_header = key.header();
                let val_header = val.header();
                match rest
                    .strip_prefix(key_header.as_str())
                    .and_then(|r| r.strip_prefix(ELEM_SEP))
                {
                    Some(after_key) => {
                        let payload = strip_header(after_key, &val_header).ok_or_else(|| {
                            Error::type_mismatch(leading_tag(after_key), val.tag())
                        })?;
                        self.decode_raw(payload)
                    }
                    None => Err(Error::type_mismatch(leading_tag(rest), key.tag())),
                }
            }
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.header())
    }
}

/// Splits off the leading tag of a self-describing value.
fn split_tag(text: &str) -> Result<(&str, &str)> {
    text.split_once(TAG_SEP).ok_or_else(|| {
        Error::malformed_payload(format!("missing tag separator in {text:?}"))
    })
}

/// Strips an expected tag header plus its trailing separator.
fn strip_header<'a>(text: &'a str, header: &str) -> Option<&'a str> {
    text.strip_prefix(header)?.strip_prefix(TAG_SEP)
}

/// Best-effort extraction of the first declared tag of `text`, for naming
/// the offending side of a mismatch.
fn leading_tag(text: &str) -> &str {
    text.split(ELEM_SEP)
        .next()
        .unwrap_or("")
        .split(TAG_SEP)
        .next()
        .unwrap_or("")
}

/// The tag a dynamic value would naturally carry, used when an encode is
/// handed a value that does not fit the target shape.
const fn value_tag(value: &Value) -> Tag {
    match value {
        Value::Str(_) => Tag::Str,
        Value::Int(_) => Tag::Int,
        Value::Float(_) => Tag::Float,
        Value::Bool(_) => Tag::Bool,
        Value::Seq(_) => Tag::Seq,
        Value::Map(_) => Tag::Map,
        Value::Pair(_, _) => Tag::Pair,
    }
}
