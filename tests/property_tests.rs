//! Property-based tests for the codec and the field registry.

use proptest::prelude::*;
use tagline::{Registry, Shape, Value};

/// Encodes, decodes, and returns the decoded value, asserting the decode
/// succeeded for text the codec itself produced.
fn round_trip(shape: &Shape, value: &Value) -> Value {
    let text = shape.encode(value).expect("encode failed");
    shape.decode(&text).expect("decode failed")
}

proptest! {
    #[test]
    fn prop_int_round_trip(n in any::<i64>()) {
        let value = Value::Int(n);
        prop_assert_eq!(round_trip(&Shape::Int, &value), value);
    }

    #[test]
    fn prop_float_round_trip(f in -1.0e12_f64..1.0e12) {
        let value = Value::Float(f);
        prop_assert_eq!(round_trip(&Shape::Float, &value), value);
    }

    #[test]
    fn prop_bool_round_trip(b in any::<bool>()) {
        let value = Value::Bool(b);
        prop_assert_eq!(round_trip(&Shape::Bool, &value), value);
    }

    // Payload text must stay clear of the reserved delimiters; within that
    // constraint any string round-trips, whitespace and all.
    #[test]
    fn prop_string_round_trip(s in "[a-zA-Z0-9_ .,:;!?-]{0,24}") {
        let value = Value::Str(s);
        prop_assert_eq!(round_trip(&Shape::Str, &value), value);
    }

    #[test]
    fn prop_int_seq_round_trip(elems in prop::collection::vec(any::<i64>(), 0..16)) {
        let shape = Shape::seq_of(Shape::Int);
        let value = Value::Seq(elems.into_iter().map(Value::Int).collect());
        prop_assert_eq!(round_trip(&shape, &value), value);
    }

    #[test]
    fn prop_string_seq_round_trip(elems in prop::collection::vec("[a-z]{1,8}", 0..12)) {
        let shape = Shape::seq_of(Shape::Str);
        let value = Value::Seq(elems.into_iter().map(Value::Str).collect());
        prop_assert_eq!(round_trip(&shape, &value), value);
    }

    #[test]
    fn prop_map_round_trip(
        entries in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..10)
    ) {
        let shape = Shape::map_of(Shape::Str, Shape::Int);
        let mut value = Value::Map(Vec::new());
        for (k, v) in entries {
            value.insert_entry(Value::Str(k), Value::Int(v));
        }
        prop_assert_eq!(round_trip(&shape, &value), value);
    }

    #[test]
    fn prop_pair_round_trip(k in "[a-z]{1,8}", v in -1.0e12_f64..1.0e12) {
        let shape = Shape::pair_of(Shape::Str, Shape::Float);
        let value = Value::Pair(Box::new(Value::Str(k)), Box::new(Value::Float(v)));
        prop_assert_eq!(round_trip(&shape, &value), value);
    }

    // Encoding is a pure function of the value: re-encoding the decoded
    // value reproduces the original text byte for byte.
    #[test]
    fn prop_encode_is_stable(elems in prop::collection::vec(any::<i64>(), 0..16)) {
        let shape = Shape::seq_of(Shape::Int);
        let value = Value::Seq(elems.into_iter().map(Value::Int).collect());

        let text = shape.encode(&value).unwrap();
        let decoded = shape.decode(&text).unwrap();
        prop_assert_eq!(shape.encode(&decoded).unwrap(), text);
    }

    #[test]
    fn prop_record_round_trip(
        count in any::<i64>(),
        name in "[a-z]{0,12}",
        live in any::<bool>(),
    ) {
        #[derive(Default, Debug, Clone, PartialEq)]
        struct Item {
            count: i64,
            name: String,
            live: bool,
        }

        let mut registry: Registry<Item> = Registry::new();
        registry
            .bind("count", |i: &Item| i.count, |i: &mut Item, v| i.count = v)
            .unwrap();
        registry
            .bind("name", |i: &Item| i.name.clone(), |i: &mut Item, v| i.name = v)
            .unwrap();
        registry
            .bind("live", |i: &Item| i.live, |i: &mut Item, v| i.live = v)
            .unwrap();

        let item = Item { count, name, live };
        let line = registry.to_line(&item).unwrap();

        let mut restored = Item::default();
        registry.from_line(&mut restored, &line).unwrap();
        prop_assert_eq!(restored, item);
    }

    // Arbitrary junk never panics; it either parses or returns an error.
    #[test]
    fn prop_decode_never_panics(text in "[a-zA-Z0-9$^#|+-]{0,32}") {
        let _ = Shape::Int.decode(&text);
        let _ = Shape::seq_of(Shape::Str).decode(&text);
        let _ = Shape::map_of(Shape::Str, Shape::Int).decode(&text);
        let _ = Shape::pair_of(Shape::Bool, Shape::Float).decode(&text);
    }
}
