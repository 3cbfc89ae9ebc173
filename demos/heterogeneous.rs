//! Demonstrates storing values of different types in one list.
//!
//! Every element is an `AnyValue`, so the list itself is an ordinary
//! `Vec<AnyValue>`. Typed access is checked at runtime.
//!
//! Run with: cargo run --example heterogeneous

use sovran_anyvalue::{AnyValue, ValueError};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

fn describe(value: &AnyValue) -> String {
    if let Ok(n) = value.get::<i32>() {
        format!("integer {}", n)
    } else if let Ok(text) = value.get_ref::<String>() {
        format!("text {:?}", text)
    } else if let Ok(point) = value.get_ref::<Point>() {
        format!("point ({}, {})", point.x, point.y)
    } else if value.is_unit() {
        "nothing".to_string()
    } else {
        format!("something of type {}", value.type_name())
    }
}

fn main() -> Result<(), ValueError> {
    let mut items = vec![
        AnyValue::new(44),
        AnyValue::new("x"),
        AnyValue::new(Point { x: 1.0, y: 2.5 }),
        AnyValue::default(),
        AnyValue::new(true),
    ];

    for item in &items {
        println!("{}", describe(item));
    }

    // Lists of values are values too
    let nested = AnyValue::new(items.clone());
    let copy = nested.get::<Vec<AnyValue>>()?;
    println!("Second element: {}", copy[1].get::<String>()?);

    // Change the type held by one element
    items[3].set(7i32);
    println!("After update: {}", describe(&items[3]));

    // The nested copy is independent
    assert!(nested.get_ref::<Vec<AnyValue>>()?[3].is_unit());

    // Wrong-type access is an error, not a crash
    match items[0].get::<bool>() {
        Ok(flag) => println!("Flag: {}", flag),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}
