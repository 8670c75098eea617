//! End-to-end tour of the field registry: bind a struct's fields once,
//! then encode, mutate, re-encode, and restore records as single lines.
//!
//! Run with: `cargo run --example save_line`

use indexmap::IndexMap;
use tagline::Registry;

#[derive(Default, Debug)]
struct Save {
    value: i64,
    kind: String,
    scores: IndexMap<String, i64>,
}

fn registry() -> Registry<Save> {
    let mut registry = Registry::new();
    registry
        .bind("value", |s: &Save| s.value, |s: &mut Save, v| s.value = v)
        .unwrap();
    registry
        .bind(
            "type",
            |s: &Save| s.kind.clone(),
            |s: &mut Save, v| s.kind = v,
        )
        .unwrap();
    registry
        .bind(
            "scores",
            |s: &Save| s.scores.clone(),
            |s: &mut Save, v| s.scores = v,
        )
        .unwrap();
    registry
}

fn main() {
    let registry = registry();

    let mut save = Save {
        value: 10,
        kind: "work".to_string(),
        scores: IndexMap::new(),
    };
    save.scores.insert("test1".to_string(), 200);
    save.scores.insert("test2".to_string(), 300);

    // Fields are emitted high-to-low by name, so the layout is stable no
    // matter the order they were bound in.
    let line = registry.to_line(&save).unwrap();
    println!("encoded:    {line}");

    save.value = 11;
    save.kind = "play".to_string();
    save.scores.insert("test3".to_string(), 400);
    println!("re-encoded: {}", registry.to_line(&save).unwrap());

    // Restore a fresh record from a stored line.
    let mut restored = Save::default();
    registry
        .from_line(&mut restored, "i$20|s$cat|m$s^i$test6^500#test7^800")
        .unwrap();
    println!("restored:   {restored:?}");

    // Decoding validates tags against the bound shapes.
    let mut bad = Save::default();
    let err = registry
        .from_line(&mut bad, "s$20|s$cat|m$s^i$test6^500")
        .unwrap_err();
    println!("rejected:   {err}");
}
