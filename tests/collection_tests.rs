use sovran_anyvalue::{AnyValue, ValueError};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
enum Theme {
    Light,
    Dark,
}

fn settings() -> HashMap<String, AnyValue> {
    let mut bag = HashMap::new();
    bag.insert("name".to_string(), AnyValue::new("demo"));
    bag.insert("retries".to_string(), AnyValue::new(3u32));
    bag.insert("theme".to_string(), AnyValue::new(Theme::Dark));
    bag.insert(
        "tags".to_string(),
        AnyValue::new(vec![AnyValue::new("a"), AnyValue::new(1)]),
    );
    bag
}

#[test]
fn test_property_bag_lookup() -> Result<(), ValueError> {
    let bag = settings();

    assert_eq!(bag["name"].get::<String>()?, "demo");
    assert_eq!(bag["retries"].get::<u32>()?, 3);
    assert_eq!(bag["theme"].get::<Theme>()?, Theme::Dark);

    let tags = bag["tags"].get_ref::<Vec<AnyValue>>()?;
    assert_eq!(tags[0], "a");
    assert_eq!(tags[1].get::<i32>()?, 1);

    Ok(())
}

#[test]
fn test_bag_copies_compare_equal() {
    let bag = settings();
    let copy = bag.clone();
    assert_eq!(bag, copy);

    let mut changed = bag.clone();
    if let Some(theme) = changed.get_mut("theme") {
        theme.set(Theme::Light);
    }
    assert_ne!(bag, changed);
    assert_eq!(bag["theme"].get::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn test_sequence_equality_is_element_wise() {
    let a = AnyValue::new(vec![AnyValue::new(1), AnyValue::new("x")]);
    let b = AnyValue::new(vec![AnyValue::new(1), AnyValue::new("x".to_string())]);
    let c = AnyValue::new(vec![AnyValue::new(1u8), AnyValue::new("x")]);

    assert_eq!(a, b);
    // Same shape, but the first element holds a different type
    assert_ne!(a, c);
}

#[test]
fn test_apply_over_mixed_values() -> Result<(), ValueError> {
    let mut values = vec![
        AnyValue::new(1i32),
        AnyValue::new("skip"),
        AnyValue::new(2i32),
        AnyValue::default(),
    ];

    for value in values.iter_mut().filter(|v| v.is::<i32>()) {
        value.with_mut(|n: &mut i32| *n *= 10)?;
    }

    let sum: i32 = values
        .iter()
        .filter_map(|v| v.get::<i32>().ok())
        .sum();
    assert_eq!(sum, 30);
    assert!(values[3].is_unit());

    Ok(())
}

#[test]
fn test_error_propagation() {
    fn retries(bag: &HashMap<String, AnyValue>) -> Result<u64, ValueError> {
        bag["retries"].get::<u64>()
    }

    let err = retries(&settings()).unwrap_err();
    assert!(err.to_string().contains("u32"));
    assert!(err.to_string().contains("u64"));
}
