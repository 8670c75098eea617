//! Field registration and whole-record encode/decode.
//!
//! A [`Registry<R>`] binds named fields of a record type `R` to their wire
//! shapes through get/set accessors. The registry never owns the field
//! storage; the record does, and the accessors reach into it. Encoding
//! walks the registered descriptors in a deterministic name order, asks
//! each for its self-describing text, and joins the results with the field
//! separator; decoding splits a line into exactly as many segments and
//! writes each decoded value back through the matching accessor.
//!
//! Registration is append-only, rejects duplicate names, and must finish
//! before the first encode/decode call. A registry is typically built once
//! next to the record type it describes and reused for every instance.
//!
//! ## Examples
//!
//! ```rust
//! use tagline::Registry;
//!
//! #[derive(Default)]
//! struct Save {
//!     value: i64,
//!     kind: String,
//! }
//!
//! let mut registry: Registry<Save> = Registry::new();
//! registry
//!     .bind("value", |s: &Save| s.value, |s: &mut Save, v| s.value = v)
//!     .unwrap();
//! registry
//!     .bind("type", |s: &Save| s.kind.clone(), |s: &mut Save, v| s.kind = v)
//!     .unwrap();
//!
//! let save = Save { value: 10, kind: "work".to_string() };
//! assert_eq!(registry.to_line(&save).unwrap(), "i$10|s$work");
//!
//! let mut restored = Save::default();
//! registry.from_line(&mut restored, "i$20|s$cat").unwrap();
//! assert_eq!(restored.value, 20);
//! assert_eq!(restored.kind, "cat");
//! ```

use std::fmt;

use crate::codec::Shape;
use crate::error::{Error, Result};
use crate::field::FieldType;
use crate::grammar::FIELD_SEP;
use crate::value::Value;

/// Binds one field name to its wire shape and its record accessors.
///
/// The get accessor may fail with
/// [`InvalidReference`](Error::InvalidReference) when the bound storage has
/// no usable target (see [`Registry::bind_optional`]); plain bindings never
/// fail on access.
pub struct FieldDescriptor<R> {
    name: String,
    shape: Shape,
    get: Box<dyn Fn(&R) -> Result<Value>>,
    set: Box<dyn Fn(&mut R, Value) -> Result<()>>,
}

impl<R> FieldDescriptor<R> {
    /// Returns the field name this descriptor was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wire shape of the bound field.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of field descriptors for one record type.
///
/// Descriptors are kept in an explicitly sorted list, materialized at
/// registration time: sorted by field name, descending, never by
/// registration order. Both [`to_line`](Registry::to_line) and
/// [`from_line`](Registry::from_line) walk this order, which makes a
/// record's line layout a stable contract independent of how the caller
/// happened to register its fields.
pub struct Registry<R> {
    fields: Vec<FieldDescriptor<R>>,
}

impl<R> Registry<R> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Registry { fields: Vec::new() }
    }

    /// Registers a field through infallible get/set accessors.
    ///
    /// The wire shape is taken from `T`'s [`FieldType`] impl. The get
    /// accessor returns the field by value (clone inside the closure for
    /// non-`Copy` fields); the set accessor writes a decoded value back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateField`] when `name` is already registered;
    /// the registry keeps the first registration.
    pub fn bind<T, G, S>(&mut self, name: &str, get: G, set: S) -> Result<()>
    where
        T: FieldType,
        G: Fn(&R) -> T + 'static,
        S: Fn(&mut R, T) + 'static,
    {
        self.insert(FieldDescriptor {
            name: name.to_string(),
            shape: T::shape(),
            get: Box::new(move |record| Ok(get(record).into_value())),
            set: Box::new(move |record, value| {
                set(record, T::from_value(value)?);
                Ok(())
            }),
        })
    }

    /// Registers a field whose storage may have no usable target.
    ///
    /// Encoding a record whose get accessor yields `None` fails with
    /// [`Error::InvalidReference`] naming the field; decoding always writes
    /// a value through the set accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagline::{Error, Registry};
    ///
    /// #[derive(Default)]
    /// struct Save {
    ///     comment: Option<String>,
    /// }
    ///
    /// let mut registry: Registry<Save> = Registry::new();
    /// registry
    ///     .bind_optional(
    ///         "comment",
    ///         |s: &Save| s.comment.clone(),
    ///         |s: &mut Save, v| s.comment = Some(v),
    ///     )
    ///     .unwrap();
    ///
    /// let empty = Save::default();
    /// assert!(matches!(
    ///     registry.to_line(&empty).unwrap_err(),
    ///     Error::InvalidReference(_)
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateField`] when `name` is already registered.
    pub fn bind_optional<T, G, S>(&mut self, name: &str, get: G, set: S) -> Result<()>
    where
        T: FieldType,
        G: Fn(&R) -> Option<T> + 'static,
        S: Fn(&mut R, T) + 'static,
    {
        let field = name.to_string();
        self.insert(FieldDescriptor {
            name: name.to_string(),
            shape: T::shape(),
            get: Box::new(move |record| match get(record) {
                Some(value) => Ok(value.into_value()),
                None => Err(Error::invalid_reference(&field)),
            }),
            set: Box::new(move |record, value| {
                set(record, T::from_value(value)?);
                Ok(())
            }),
        })
    }

    /// Encodes `record` as a single line: every field in name-descending
    /// order, self-describing, joined by the field separator.
    ///
    /// # Errors
    ///
    /// Returns the first accessor or converter error encountered.
    pub fn to_line(&self, record: &R) -> Result<String> {
        let parts: Result<Vec<String>> = self
            .fields
            .iter()
            .map(|descriptor| {
                let value = (descriptor.get)(record)?;
                descriptor.shape.encode(&value)
            })
            .collect();
        Ok(parts?.join(&FIELD_SEP.to_string()))
    }

    /// Decodes `line` into `record`, field by field.
    ///
    /// The line must carry exactly as many segments as the registry has
    /// fields; segments pair with descriptors in the same name-descending
    /// order that [`to_line`](Registry::to_line) emits. Fields written
    /// before a failing segment stay written; callers needing atomicity
    /// decode into a fresh record and swap it in on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldCountMismatch`] on a segment count mismatch
    /// and the first tag/payload error otherwise.
    pub fn from_line(&self, record: &mut R, line: &str) -> Result<()> {
        let segments: Vec<&str> = line.split(FIELD_SEP).collect();
        if segments.len() != self.fields.len() {
            return Err(Error::field_count_mismatch(
                self.fields.len(),
                segments.len(),
            ));
        }
        for (descriptor, segment) in self.fields.iter().zip(segments) {
            let value = descriptor.shape.decode(segment)?;
            (descriptor.set)(record, value)?;
        }
        Ok(())
    }

    /// Returns the registered field names in encode order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|d| d.name.as_str()).collect()
    }

    /// Returns the descriptor registered under `name`, if any.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor<R>> {
        self.position(name)
            .ok()
            .map(|index| &self.fields[index])
    }

    /// Returns the number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, descriptor: FieldDescriptor<R>) -> Result<()> {
        match self.position(&descriptor.name) {
            Ok(_) => Err(Error::duplicate_field(&descriptor.name)),
            Err(index) => {
                self.fields.insert(index, descriptor);
                Ok(())
            }
        }
    }

    /// Binary search in the descending name order the list maintains.
    fn position(&self, name: &str) -> std::result::Result<usize, usize> {
        self.fields
            .binary_search_by(|descriptor| name.cmp(descriptor.name.as_str()))
    }
}

impl<R> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Registry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("fields", &self.field_names())
            .finish()
    }
}
