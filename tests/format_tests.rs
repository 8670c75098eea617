//! Exact wire text assertions for the delimited-line format.

use indexmap::IndexMap;
use tagline::{Error, Registry, Shape, Value};

#[test]
fn test_scalar_wire_text() {
    assert_eq!(Shape::Int.encode(&Value::Int(10)).unwrap(), "i$10");
    assert_eq!(Shape::Int.encode(&Value::Int(-3)).unwrap(), "i$-3");
    assert_eq!(
        Shape::Str.encode(&Value::from("work")).unwrap(),
        "s$work"
    );
    assert_eq!(Shape::Float.encode(&Value::Float(1.5)).unwrap(), "f$1.5");
    assert_eq!(Shape::Bool.encode(&Value::Bool(true)).unwrap(), "b$+");
    assert_eq!(Shape::Bool.encode(&Value::Bool(false)).unwrap(), "b$-");
}

#[test]
fn test_scalar_decode() {
    assert_eq!(Shape::Int.decode("i$10").unwrap(), Value::Int(10));
    assert_eq!(
        Shape::Str.decode("s$work").unwrap(),
        Value::from("work")
    );
    assert_eq!(Shape::Bool.decode("b$+").unwrap(), Value::Bool(true));
    assert_eq!(Shape::Bool.decode("b$-").unwrap(), Value::Bool(false));
}

#[test]
fn test_bool_payload_is_strict() {
    for text in ["b$true", "b$1", "b$", "b$ +"] {
        let err = Shape::Bool.decode(text).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)), "{}", text);
    }
}

#[test]
fn test_sequence_wire_text() {
    let value = Value::Seq(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let shape = Shape::seq_of(Shape::Int);
    assert_eq!(shape.encode(&value).unwrap(), "v$i$1^2^3");
    assert_eq!(shape.decode("v$i$1^2^3").unwrap(), value);
}

#[test]
fn test_map_wire_text() {
    let shape = Shape::map_of(Shape::Str, Shape::Int);
    let mut value = Value::Map(vec![]);
    value.insert_entry(Value::from("test1"), Value::from(200));
    value.insert_entry(Value::from("test2"), Value::from(300));

    let text = shape.encode(&value).unwrap();
    assert_eq!(text, "m$s^i$test1^200#test2^300");
    assert_eq!(shape.decode(&text).unwrap(), value);
}

#[test]
fn test_pair_wire_text() {
    let shape = Shape::pair_of(Shape::Str, Shape::Float);
    let value = Value::Pair(
        Box::new(Value::from("name")),
        Box::new(Value::Float(1.5)),
    );
    assert_eq!(shape.encode(&value).unwrap(), "p$s^f$name^1.5");
    assert_eq!(shape.decode("p$s^f$name^1.5").unwrap(), value);
}

#[test]
fn test_empty_composites() {
    let seq = Shape::seq_of(Shape::Int);
    assert_eq!(seq.encode(&Value::Seq(vec![])).unwrap(), "v$i$");
    assert_eq!(seq.decode("v$i$").unwrap(), Value::Seq(vec![]));

    let map = Shape::map_of(Shape::Str, Shape::Int);
    assert_eq!(map.encode(&Value::Map(vec![])).unwrap(), "m$s^i$");
    assert_eq!(map.decode("m$s^i$").unwrap(), Value::Map(vec![]));
}

#[test]
fn test_duplicate_map_key_last_wins() {
    let shape = Shape::map_of(Shape::Str, Shape::Int);
    let decoded = shape.decode("m$s^i$hp^10#hp^25").unwrap();
    assert_eq!(
        decoded,
        Value::Map(vec![(Value::from("hp"), Value::Int(25))])
    );
}

#[derive(Default)]
struct Task {
    value: i64,
    kind: String,
}

fn task_registry() -> Registry<Task> {
    let mut registry = Registry::new();
    registry
        .bind("value", |t: &Task| t.value, |t: &mut Task, v| t.value = v)
        .unwrap();
    registry
        .bind(
            "type",
            |t: &Task| t.kind.clone(),
            |t: &mut Task, v| t.kind = v,
        )
        .unwrap();
    registry
}

#[test]
fn test_record_line_layout() {
    let registry = task_registry();
    let task = Task {
        value: 10,
        kind: "work".to_string(),
    };
    assert_eq!(registry.to_line(&task).unwrap(), "i$10|s$work");
}

#[test]
fn test_record_line_decode() {
    let registry = task_registry();
    let mut task = Task::default();
    registry.from_line(&mut task, "i$20|s$cat").unwrap();
    assert_eq!(task.value, 20);
    assert_eq!(task.kind, "cat");
}

#[test]
fn test_record_with_map_field() {
    #[derive(Default)]
    struct Stats {
        value: i64,
        kind: String,
        scores: IndexMap<String, i64>,
    }

    let mut registry: Registry<Stats> = Registry::new();
    registry
        .bind("value", |s: &Stats| s.value, |s: &mut Stats, v| {
            s.value = v
        })
        .unwrap();
    registry
        .bind(
            "type",
            |s: &Stats| s.kind.clone(),
            |s: &mut Stats, v| s.kind = v,
        )
        .unwrap();
    registry
        .bind(
            "scores",
            |s: &Stats| s.scores.clone(),
            |s: &mut Stats, v| s.scores = v,
        )
        .unwrap();

    let mut stats = Stats {
        value: 10,
        kind: "work".to_string(),
        scores: IndexMap::new(),
    };
    stats.scores.insert("test1".to_string(), 200);
    stats.scores.insert("test2".to_string(), 300);

    // Fields sort high-to-low by name: value, type, scores.
    assert_eq!(
        registry.to_line(&stats).unwrap(),
        "i$10|s$work|m$s^i$test1^200#test2^300"
    );

    let mut restored = Stats::default();
    registry
        .from_line(&mut restored, "i$20|s$cat|m$s^i$test6^500#test7^800")
        .unwrap();
    assert_eq!(restored.value, 20);
    assert_eq!(restored.kind, "cat");
    assert_eq!(restored.scores.get("test6"), Some(&500));
    assert_eq!(restored.scores.get("test7"), Some(&800));
}

#[test]
fn test_headers_are_self_describing() {
    assert_eq!(Shape::Int.to_string(), "i");
    assert_eq!(Shape::seq_of(Shape::Int).to_string(), "v$i");
    assert_eq!(Shape::map_of(Shape::Str, Shape::Int).to_string(), "m$s^i");
    assert_eq!(
        Shape::pair_of(Shape::Str, Shape::Float).to_string(),
        "p$s^f"
    );
    assert_eq!(
        Shape::seq_of(Shape::pair_of(Shape::Str, Shape::Int)).to_string(),
        "v$p$s^i"
    );
}

#[test]
fn test_missing_tag_separator() {
    let err = Shape::Int.decode("10").unwrap_err();
    assert!(matches!(err, Error::MalformedPayload(_)));
}

#[test]
fn test_mismatch_error_uses_long_names() {
    let err = Shape::Int.decode("f$1.5").unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: trying to convert from Float to Integral"
    );

    // An unknown tag shows up as Undefined.
    let err = Shape::Int.decode("x$1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: trying to convert from Undefined to Integral"
    );
}
