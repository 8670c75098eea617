//! Working with shapes and dynamic values directly, without binding a
//! struct: build values with the `value!` macro, encode them against a
//! shape, and inspect what comes back.
//!
//! Run with: `cargo run --example dynamic_value`

use tagline::{value, Shape, Value};

fn main() {
    // Scalars carry a single tag.
    for (shape, value) in [
        (Shape::Int, value!(42)),
        (Shape::Str, value!("hello")),
        (Shape::Float, value!(1.5)),
        (Shape::Bool, value!(true)),
    ] {
        println!("{:<8} -> {}", shape.header(), shape.encode(&value).unwrap());
    }

    // Composites declare their element tags up front.
    let scores = Shape::map_of(Shape::Str, Shape::Int);
    let value = value!({ "test1" => 200, "test2" => 300 });
    let text = scores.encode(&value).unwrap();
    println!("{:<8} -> {}", scores.header(), text);

    // Decoding re-checks every declared tag before parsing.
    let decoded = scores.decode(&text).unwrap();
    println!("decoded  -> {decoded}");
    println!(
        "test2    -> {}",
        decoded.get_entry(&Value::from("test2")).unwrap()
    );

    let err = scores.decode("m$i^i$1^2").unwrap_err();
    println!("mismatch -> {err}");

    // Dynamic values convert straight to JSON when needed elsewhere.
    println!("as json  -> {}", serde_json::to_string(&decoded).unwrap());
}
