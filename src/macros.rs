/// Builds a [`Value`](crate::Value) from a literal-like description.
///
/// Sequences use bracket syntax, mappings use `key => value` entries
/// (duplicate keys overwrite), and anything else falls through to
/// [`Value::from`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use tagline::{value, Value};
///
/// assert_eq!(value!(42), Value::Int(42));
/// assert_eq!(value!([1, 2]), Value::Seq(vec![Value::Int(1), Value::Int(2)]));
///
/// let map = value!({ "a" => 1, "b" => 2 });
/// assert_eq!(map.as_map().unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! value {
    // Handle booleans before the expression fallback
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::Seq(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Seq(vec![$($crate::value!($elem)),*])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Value::Map(vec![])
    };

    // Handle non-empty mapping
    ({ $($key:tt => $val:tt),* $(,)? }) => {{
        let mut map = $crate::Value::Map(vec![]);
        $(
            map.insert_entry($crate::value!($key), $crate::value!($val));
        )*
        map
    }};

    // Fallback for any expression with a From impl
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Implements [`FieldType`](crate::FieldType) for an integer-backed C-like
/// enum, so it can be bound as a record field.
///
/// The enumeration travels as its underlying integer (`i$...` on the
/// wire); decoding an integer outside the listed enumerators is a
/// [`MalformedPayload`](crate::Error::MalformedPayload) error.
///
/// # Examples
///
/// ```rust
/// use tagline::{enum_field, FieldType, Value};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Phase {
///     Idle,
///     Work,
/// }
///
/// enum_field!(Phase { Idle = 0, Work = 1 });
///
/// assert_eq!(Phase::Work.into_value(), Value::Int(1));
/// assert_eq!(Phase::from_value(Value::Int(0)).unwrap(), Phase::Idle);
/// assert!(Phase::from_value(Value::Int(9)).is_err());
/// ```
#[macro_export]
macro_rules! enum_field {
    ($ty:ident { $($variant:ident = $disc:expr),+ $(,)? }) => {
        impl $crate::FieldType for $ty {
            fn shape() -> $crate::Shape {
                $crate::Shape::Int
            }

            fn into_value(self) -> $crate::Value {
                $crate::Value::Int(match self {
                    $(Self::$variant => $disc,)+
                })
            }

            fn from_value(value: $crate::Value) -> $crate::Result<Self> {
                let disc = i64::try_from(value)?;
                match disc {
                    $(d if d == $disc => Ok(Self::$variant),)+
                    other => Err($crate::Error::malformed_payload(format!(
                        "integer {} is not a defined {} enumerator",
                        other,
                        stringify!($ty)
                    ))),
                }
            }
        }
    };
}
