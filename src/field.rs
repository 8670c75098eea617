//! Bridge between concrete Rust types and the dynamic codec.
//!
//! [`FieldType`] ties a Rust type to its wire [`Shape`] and to conversions
//! in and out of [`Value`]. The registry uses it to drive whole-record
//! encode/decode through typed accessors, so a record field declared as
//! `IndexMap<String, i64>` encodes as `m$s^i$...` with no per-call type
//! hints.
//!
//! Implementations cover the scalar primitives, `String`, `Vec<T>`,
//! [`IndexMap<K, V>`], and two-element tuples. Integer-backed C-like enums
//! join the set through the [`enum_field!`](crate::enum_field) macro.
//!
//! ## Examples
//!
//! ```rust
//! use tagline::{FieldType, Shape, Value};
//!
//! assert_eq!(<Vec<i64>>::shape(), Shape::seq_of(Shape::Int));
//!
//! let value = vec![1i64, 2, 3].into_value();
//! assert_eq!(<Vec<i64>>::from_value(value).unwrap(), vec![1, 2, 3]);
//! ```

use indexmap::IndexMap;
use std::hash::Hash;

use crate::codec::Shape;
use crate::error::{Error, Result};
use crate::value::Value;

/// A Rust type with a wire shape and value conversions.
///
/// `from_value` is the inverse of `into_value` for values the codec
/// produces for [`shape()`](FieldType::shape); handing it a value of a
/// different shape is an error, never a coercion.
pub trait FieldType: Sized {
    /// The wire shape of this type, stable per type.
    fn shape() -> Shape;

    /// Converts this value into its dynamic representation.
    fn into_value(self) -> Value;

    /// Recovers a typed value from its dynamic representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] when `value` has the wrong shape
    /// or does not fit this type's range.
    fn from_value(value: Value) -> Result<Self>;
}

impl FieldType for String {
    fn shape() -> Shape {
        Shape::Str
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        String::try_from(value)
    }
}

impl FieldType for bool {
    fn shape() -> Shape {
        Shape::Bool
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        bool::try_from(value)
    }
}

impl FieldType for i64 {
    fn shape() -> Shape {
        Shape::Int
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        i64::try_from(value)
    }
}

impl FieldType for f64 {
    fn shape() -> Shape {
        Shape::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(Error::malformed_payload(format!(
                "expected float, found {other:?}"
            ))),
        }
    }
}

impl FieldType for f32 {
    fn shape() -> Shape {
        Shape::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }

    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|f| f as f32)
    }
}

/// Narrowing integer impls share the `i64` wire form; out-of-range payloads
/// are malformed rather than wrapped.
macro_rules! int_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn shape() -> Shape {
                    Shape::Int
                }

                fn into_value(self) -> Value {
                    Value::Int(self as i64)
                }

                fn from_value(value: Value) -> Result<Self> {
                    let wide = i64::try_from(value)?;
                    <$ty>::try_from(wide).map_err(|_| {
                        Error::malformed_payload(format!(
                            "integer {} out of range for {}",
                            wide,
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

int_field!(i8, i16, i32, u8, u16, u32);

impl<T: FieldType> FieldType for Vec<T> {
    fn shape() -> Shape {
        Shape::seq_of(T::shape())
    }

    fn into_value(self) -> Value {
        Value::Seq(self.into_iter().map(FieldType::into_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Seq(elems) => elems.into_iter().map(T::from_value).collect(),
            other => Err(Error::malformed_payload(format!(
                "expected sequence, found {other:?}"
            ))),
        }
    }
}

impl<K, V> FieldType for IndexMap<K, V>
where
    K: FieldType + Hash + Eq,
    V: FieldType,
{
    fn shape() -> Shape {
        Shape::map_of(K::shape(), V::shape())
    }

    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Map(entries) => {
                let mut map = IndexMap::with_capacity(entries.len());
                for (k, v) in entries {
                    map.insert(K::from_value(k)?, V::from_value(v)?);
                }
                Ok(map)
            }
            other => Err(Error::malformed_payload(format!(
                "expected mapping, found {other:?}"
            ))),
        }
    }
}

impl<A: FieldType, B: FieldType> FieldType for (A, B) {
    fn shape() -> Shape {
        Shape::pair_of(A::shape(), B::shape())
    }

    fn into_value(self) -> Value {
        Value::Pair(Box::new(self.0.into_value()), Box::new(self.1.into_value()))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Pair(a, b) => Ok((A::from_value(*a)?, B::from_value(*b)?)),
            other => Err(Error::malformed_payload(format!(
                "expected pair, found {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(String::shape(), Shape::Str);
        assert_eq!(i32::shape(), Shape::Int);
        assert_eq!(u16::shape(), Shape::Int);
        assert_eq!(f64::shape(), Shape::Float);
        assert_eq!(bool::shape(), Shape::Bool);
    }

    #[test]
    fn test_composite_shapes() {
        assert_eq!(<Vec<String>>::shape(), Shape::seq_of(Shape::Str));
        assert_eq!(
            <IndexMap<String, i64>>::shape(),
            Shape::map_of(Shape::Str, Shape::Int)
        );
        assert_eq!(<(String, f64)>::shape(), Shape::pair_of(Shape::Str, Shape::Float));
    }

    #[test]
    fn test_scalar_value_round_trip() {
        assert_eq!(i32::from_value(42i32.into_value()).unwrap(), 42);
        assert_eq!(
            String::from_value("hi".to_string().into_value()).unwrap(),
            "hi"
        );
        assert_eq!(bool::from_value(true.into_value()).unwrap(), true);
        assert_eq!(f64::from_value(1.5f64.into_value()).unwrap(), 1.5);
    }

    #[test]
    fn test_narrowing_out_of_range() {
        let err = u8::from_value(Value::Int(300)).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));

        let err = i16::from_value(Value::Int(-40_000)).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));
    }

    #[test]
    fn test_vec_round_trip() {
        let original = vec![1i64, 2, 3];
        let value = original.clone().into_value();
        assert_eq!(<Vec<i64>>::from_value(value).unwrap(), original);
    }

    #[test]
    fn test_indexmap_round_trip_keeps_order() {
        let mut original = IndexMap::new();
        original.insert("b".to_string(), 2i64);
        original.insert("a".to_string(), 1i64);

        let value = original.clone().into_value();
        let back = <IndexMap<String, i64>>::from_value(value).unwrap();
        assert_eq!(back, original);
        assert_eq!(
            back.keys().collect::<Vec<_>>(),
            vec![&"b".to_string(), &"a".to_string()]
        );
    }

    #[test]
    fn test_pair_round_trip() {
        let original = ("score".to_string(), 9.5f64);
        let value = original.clone().into_value();
        assert_eq!(<(String, f64)>::from_value(value).unwrap(), original);
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(<Vec<i64>>::from_value(Value::Int(1)).is_err());
        assert!(<(i64, i64)>::from_value(Value::Seq(vec![])).is_err());
        assert!(f64::from_value(Value::Int(1)).is_err());
    }
}
