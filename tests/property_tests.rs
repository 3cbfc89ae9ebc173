use proptest::prelude::*;
use sovran_anyvalue::{AnyValue, TypeWitness};

proptest! {
    #[test]
    fn prop_get_returns_stored_integer(v in any::<i64>()) {
        let value = AnyValue::new(v);
        prop_assert_eq!(value.type_witness(), TypeWitness::of::<i64>());
        prop_assert_eq!(value.get::<i64>(), Ok(v));
    }

    #[test]
    fn prop_get_returns_stored_string(v in ".*") {
        let value = AnyValue::new(v.clone());
        prop_assert_eq!(value.get::<String>(), Ok(v.clone()));
        prop_assert!(value == v);
    }

    #[test]
    fn prop_other_types_are_rejected(v in any::<u32>()) {
        let value = AnyValue::new(v);
        prop_assert!(value.get::<u32>().is_ok());
        prop_assert!(value.assert_type::<u32>().is_ok());
        prop_assert!(value.get::<i32>().is_err());
        prop_assert!(value.assert_type::<u64>().is_err());
        prop_assert!(value.get::<String>().is_err());
    }

    #[test]
    fn prop_equality_follows_payload(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(AnyValue::new(a) == AnyValue::new(b), a == b);
        prop_assert_eq!(AnyValue::new(a).equals_value(&b), a == b);
    }

    #[test]
    fn prop_float_equality_follows_payload(a in any::<f64>(), b in any::<f64>()) {
        // NaN stays unequal to itself, the same as the raw values
        prop_assert_eq!(AnyValue::new(a) == AnyValue::new(b), a == b);
        let value = AnyValue::new(a);
        prop_assert_eq!(value == value.clone(), !a.is_nan());
    }

    #[test]
    fn prop_cross_type_never_equal(a in any::<i32>(), b in any::<i64>()) {
        prop_assert!(AnyValue::new(a) != AnyValue::new(b));
        prop_assert!(!AnyValue::new(a).equals_value(&(a as i64)));
    }

    #[test]
    fn prop_clone_then_set_leaves_original(a in any::<i32>(), b in any::<i32>(), text in "[a-z]{0,8}") {
        let original = AnyValue::new(a);
        let mut copy = original.clone();

        copy.set(b);
        prop_assert_eq!(original.get::<i32>(), Ok(a));

        copy.set(text.clone());
        prop_assert_eq!(original.get::<i32>(), Ok(a));
        prop_assert!(copy == text);
    }

    #[test]
    fn prop_set_same_type_updates_value(values in proptest::collection::vec(any::<u8>(), 1..16)) {
        let mut value = AnyValue::default();
        for v in &values {
            value.set(*v);
            prop_assert_eq!(value.type_witness(), TypeWitness::of::<u8>());
            prop_assert_eq!(value.get::<u8>(), Ok(*v));
        }
    }
}
