//! # tagline
//!
//! A compact, self-describing delimited-line codec: the fields of an
//! in-memory record become a single line of text and back, with no external
//! schema. Every encoded value carries its own type tag, so a decoder can
//! validate and parse it independently of program state.
//!
//! ## Wire format at a glance
//!
//! ```text
//! i$10|s$work|m$s^i$test1^200#test2^300
//! ```
//!
//! - `$` separates a type tag from its payload (`i$10` is the integer 10)
//! - `|` separates sibling record fields
//! - `^` separates sequence elements and the halves of an entry
//! - `#` separates mapping entries
//!
//! Supported shapes: string (`s`), integer (`i`), float (`f`), boolean
//! (`b`), sequence (`v`), mapping (`m`), and pair (`p`). Composite shapes
//! declare their element tags in the header (`v$i`, `m$s^i`), so a value
//! is parseable without knowing anything but the expected target type.
//!
//! ## Key pieces
//!
//! - [`Shape`]: the closed, recursive shape set with raw and
//!   self-describing encode/decode
//! - [`Value`]: the dynamic value the codec produces and consumes
//! - [`FieldType`]: the bridge from concrete Rust types to shapes/values
//! - [`Registry`]: ordered field registration plus whole-record
//!   [`to_line`](Registry::to_line) / [`from_line`](Registry::from_line)
//!
//! ## Quick start
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
//! let line = registry.to_line(&save).unwrap();
//! assert_eq!(line, "i$10|s$work");
//!
//! let mut restored = Save::default();
//! registry.from_line(&mut restored, &line).unwrap();
//! assert_eq!(restored.value, 10);
//! assert_eq!(restored.kind, "work");
//! ```
//!
//! Fields encode in a deterministic name order regardless of registration
//! order, so the line layout of a record type is a stable contract.
//!
//! ## Dynamic values
//!
//! When the record structure is not known at compile time, drive the codec
//! directly through [`Shape`] and [`Value`]:
//!
//! ```rust
//! use tagline::{Shape, Value, value};
//!
//! let shape = Shape::map_of(Shape::Str, Shape::Int);
//! let scores = value!({ "alpha" => 1, "beta" => 2 });
//!
//! let text = shape.encode(&scores).unwrap();
//! assert_eq!(text, "m$s^i$alpha^1#beta^2");
//! assert_eq!(shape.decode(&text).unwrap(), scores);
//! ```
//!
//! ## Content constraints
//!
//! The codec does not escape field content. A payload must never contain a
//! delimiter reserved for a shallower nesting level than the one being
//! emitted (a string field must not contain `|` or `$`, a sequence element
//! must not contain `^`, and so on), or the resulting line is ambiguous.
//! This is a documented constraint on callers, matching the format.
//!
//! ## Error handling
//!
//! Every failure is a typed [`Error`]: tag mismatches carry both the found
//! and the required tag, duplicate registrations and bad field counts name
//! the numbers involved, and malformed payloads describe what failed to
//! parse. Decoding does not roll back fields written before the failure;
//! callers needing atomicity decode into a fresh record and swap it in.
//!
//! ## Scope
//!
//! The codec is a pure in-memory text transform: single-threaded,
//! synchronous, no I/O, no streaming, no schema evolution. Callers that
//! share a registry across threads must serialize access themselves.

pub mod codec;
pub mod error;
pub mod field;
pub mod grammar;
pub mod macros;
pub mod record;
pub mod text;
pub mod value;

pub use codec::Shape;
pub use error::{Error, Result};
pub use field::FieldType;
pub use grammar::{Tag, ELEM_SEP, ENTRY_SEP, FIELD_SEP, TAG_SEP};
pub use record::{FieldDescriptor, Registry};
pub use value::Value;
