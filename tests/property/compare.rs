use jsoncompare::{CompareConfig, Comparator};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Strategy for arbitrary JSON values nested up to `depth` levels.
fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-z]{1,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z][a-z0-9]{0,5}", inner), 1..5).prop_map(|pairs| {
                let map: serde_json::Map<String, Value> = pairs.into_iter().collect();
                Value::Object(map)
            }),
        ]
    })
}

/// Arbitrary object whose values are arbitrary JSON.
fn arb_object() -> impl Strategy<Value = serde_json::Map<String, Value>> {
    prop::collection::vec(("[a-z][a-z0-9]{0,5}", arb_json(3)), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Arbitrary comparable root: an array or an object.
fn arb_container() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(arb_json(3), 0..6).prop_map(Value::Array),
        arb_object().prop_map(Value::Object),
    ]
}

fn comparator(order_sensitive: bool) -> Comparator {
    Comparator::new(CompareConfig::default().with_order_sensitive(order_sensitive))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Every container contains itself, in both order modes
    #[test]
    fn compare_is_reflexive(value in arb_container(), order_sensitive in any::<bool>()) {
        let report = comparator(order_sensitive).report(&value, &value).unwrap();
        prop_assert!(report.matched);
        prop_assert!(report.mismatches.is_empty());
    }

    // Keys present only in actual never cause a failure
    #[test]
    fn extra_actual_keys_are_ignored(
        expected in arb_object(),
        extra in arb_object(),
        order_sensitive in any::<bool>(),
    ) {
        let mut actual = expected.clone();
        for (key, value) in extra {
            actual.entry(key).or_insert(value);
        }
        let result = comparator(order_sensitive)
            .compare(&Value::Object(expected), &Value::Object(actual))
            .unwrap();
        prop_assert!(result);
    }

    // Removing an expected key from actual fails and names the key
    #[test]
    fn missing_key_fails_and_is_named(
        expected in arb_object(),
        key in "[A-Z]{1,6}",
        value in arb_json(2),
    ) {
        let actual = expected.clone();
        let mut expected = expected;
        expected.insert(key.clone(), value);

        let report = comparator(false)
            .report(&Value::Object(expected), &Value::Object(actual))
            .unwrap();
        prop_assert!(!report.matched);
        let needle = format!("'{}'", key);
        prop_assert!(report.messages().any(|m| m.contains(&needle)));
    }

    // A scalar list in any permutation, with extras, is contained when order is ignored
    #[test]
    fn permuted_scalar_list_is_contained(
        (expected, shuffled) in prop::collection::vec(any::<i64>(), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        extra in prop::collection::vec(any::<i64>(), 0..4),
    ) {
        let mut actual = shuffled;
        actual.extend(extra);
        let result = comparator(false).compare(&json!(expected), &json!(actual)).unwrap();
        prop_assert!(result);
    }

    // Same inputs, same verdict and same diagnostics
    #[test]
    fn compare_is_idempotent(
        expected in arb_container(),
        actual in arb_container(),
        order_sensitive in any::<bool>(),
    ) {
        let comparator = comparator(order_sensitive);
        let first = comparator.report(&expected, &actual);
        let second = comparator.report(&expected, &actual);
        prop_assert_eq!(first, second);
    }

    // The verdict is exactly the conjunction of the recorded outcomes
    #[test]
    fn verdict_is_conjunction_of_outcomes(
        expected in arb_container(),
        actual in arb_container(),
        order_sensitive in any::<bool>(),
    ) {
        if let Ok(report) = comparator(order_sensitive).report(&expected, &actual) {
            prop_assert_eq!(report.matched, report.outcomes.iter().all(|ok| *ok));
            let failures = report.outcomes.iter().filter(|ok| !**ok).count();
            prop_assert_eq!(failures, report.mismatches.len());
        }
    }

    // Mixed container roots are always rejected
    #[test]
    fn array_against_object_root_is_type_mismatch(
        items in prop::collection::vec(arb_json(2), 0..4),
        object in arb_object(),
    ) {
        let c = comparator(false);
        prop_assert!(c.compare(&Value::Array(items.clone()), &Value::Object(object.clone())).is_err());
        prop_assert!(c.compare(&Value::Object(object), &Value::Array(items)).is_err());
    }
}
