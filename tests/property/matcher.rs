use jsoncompare::primitives::{find_best_match, match_score};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn arb_flat_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec(("[a-d]", 0i64..3), 0..5).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(k, v)| (k, json!(v)))
            .collect()
    })
}

fn arb_pool() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(
        prop_oneof![
            3 => arb_flat_object().prop_map(Value::Object),
            1 => (0i64..3).prop_map(|i| json!(i)),
        ],
        0..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // The score never exceeds the number of candidate keys
    #[test]
    fn score_is_bounded(candidate in arb_flat_object(), element in arb_flat_object()) {
        prop_assert!(match_score(&candidate, &element) <= candidate.len());
    }

    // An object always scores all of its own keys
    #[test]
    fn self_score_is_key_count(candidate in arb_flat_object()) {
        prop_assert_eq!(match_score(&candidate, &candidate), candidate.len());
    }

    // The chosen element has the maximum score and is the first one to reach it
    #[test]
    fn best_match_is_first_maximum(candidate in arb_flat_object(), pool in arb_pool()) {
        let objects: Vec<&Map<String, Value>> = pool.iter().filter_map(Value::as_object).collect();
        match find_best_match(&candidate, &pool) {
            None => prop_assert!(objects.is_empty()),
            Some((chosen, score)) => {
                let scores: Vec<usize> = objects.iter().map(|o| match_score(&candidate, o)).collect();
                let max = scores.iter().copied().max().unwrap_or(0);
                prop_assert_eq!(score, max);
                let first = scores.iter().position(|s| *s == max).unwrap();
                prop_assert!(std::ptr::eq(chosen, objects[first]));
            }
        }
    }
}
