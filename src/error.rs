//! Error types for tagline encoding and decoding.
//!
//! Every failure the codec can detect is represented as one variant of
//! [`Error`]. All of them are unrecoverable at the point of detection: the
//! current encode/decode call stops immediately and surfaces the error to
//! the caller. There is no retry, no partial success reported as success,
//! and no rollback of record fields already written before a decode failure
//! (callers needing atomicity decode into a fresh record and swap it in on
//! success).
//!
//! ## Error categories
//!
//! - **Type mismatches**: a declared tag in the text does not match the
//!   tag the target shape requires
//! - **Registration errors**: duplicate field names in one registry
//! - **Line errors**: field segment count differs from the registered count
//! - **Reference errors**: a field's bound storage has no usable target
//! - **Payload errors**: numeric parse failures, wrong segment counts
//!   inside a composite payload, unknown boolean sentinels
//!
//! ## Examples
//!
//! ```rust
//! use tagline::{Error, Shape};
//!
//! let err = Shape::Int.decode("s$work").unwrap_err();
//! assert!(matches!(err, Error::TypeMismatch { .. }));
//! assert!(err.to_string().contains("String"));
//! ```

use std::fmt;
use thiserror::Error;

use crate::grammar::Tag;

/// Represents all possible errors raised by the tagline codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A declared tag does not match the tag the target shape expects.
    /// Carries both the tag found in the text and the required one.
    #[error("type mismatch: trying to convert from {found} to {expected}")]
    TypeMismatch { found: String, expected: String },

    /// A field name was registered twice in the same registry.
    #[error("field redefinition: trying to register {0:?} when already registered")]
    DuplicateField(String),

    /// A record line carried a different number of fields than the registry.
    #[error("field count mismatch: registry has {expected} fields, line has {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    /// A field descriptor's bound storage had no usable target.
    #[error("invalid reference: field {0:?} has no value to access")]
    InvalidReference(String),

    /// A payload could not be parsed as its declared shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Generic message, used by the serde error trait impls.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a type mismatch error from the raw tag text found in the
    /// input and the tag the shape required.
    ///
    /// Both sides render with their long shape names; unknown tag text
    /// renders as `Undefined`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagline::{Error, Tag};
    ///
    /// let err = Error::type_mismatch("s", Tag::Int);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "type mismatch: trying to convert from String to Integral"
    /// );
    /// ```
    pub fn type_mismatch(found: &str, expected: Tag) -> Self {
        Error::TypeMismatch {
            found: Tag::describe(found).to_string(),
            expected: expected.long_name().to_string(),
        }
    }

    /// Creates a duplicate registration error for `name`.
    pub fn duplicate_field(name: &str) -> Self {
        Error::DuplicateField(name.to_string())
    }

    /// Creates a field count mismatch error for a record line.
    pub fn field_count_mismatch(expected: usize, found: usize) -> Self {
        Error::FieldCountMismatch { expected, found }
    }

    /// Creates an invalid reference error for the field `name`.
    pub fn invalid_reference(name: &str) -> Self {
        Error::InvalidReference(name.to_string())
    }

    /// Creates a malformed payload error with a display message.
    pub fn malformed_payload<T: fmt::Display>(msg: T) -> Self {
        Error::MalformedPayload(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
