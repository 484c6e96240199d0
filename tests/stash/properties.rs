//! Property-based tests for stash invariants.

use crate::common::*;
use proptest::prelude::*;
use stashkit::is_hidden_key;

/// Keys drawn from a small alphabet so collisions and private keys are common.
fn stash_key() -> impl Strategy<Value = String> {
    "_?[a-c]{0,3}"
}

/// Scalar values a stash typically holds.
fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ]
}

fn entries() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((stash_key(), scalar()), 0..16)
}

proptest! {
    #[test]
    fn add_then_get_returns_last_write(pairs in entries(), key in stash_key(), value in scalar()) {
        let mut stash: Stash = pairs.into_iter().collect();
        stash.add(key.as_str(), value.clone());

        prop_assert!(stash.has(&key));
        prop_assert_eq!(stash.get(&key), Some(&value));
    }

    #[test]
    fn delete_is_idempotent(pairs in entries(), key in stash_key()) {
        let mut stash: Stash = pairs.into_iter().collect();
        stash.delete(&key);
        let after_first = stash.clone();

        prop_assert_eq!(stash.delete(&key), None);
        prop_assert_eq!(&stash, &after_first);
        prop_assert!(!stash.has(&key));
    }

    #[test]
    fn serialized_keys_are_exactly_the_visible_ones(pairs in entries()) {
        let stash: Stash = pairs.into_iter().collect();
        let json = stash.to_json();
        let object = json.as_object().unwrap();

        for key in object.keys() {
            prop_assert!(!is_hidden_key(key));
        }
        let expected = stash.keys().filter(|k| !k.is_hidden()).count();
        prop_assert_eq!(object.len(), expected);

        let text = serde_json::to_string(&stash).unwrap();
        prop_assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap(), json);
    }

    #[test]
    fn absent_bool_returns_default(pairs in entries(), default in any::<bool>()) {
        let mut stash: Stash = pairs.into_iter().collect();
        stash.delete("missing");
        prop_assert_eq!(stash.get_bool("missing", default), default);
    }

    #[test]
    fn int_round_trips_through_strings(n in any::<i64>()) {
        let mut stash = Stash::new();
        stash.add("n", n.to_string());
        prop_assert_eq!(stash.get_int("n", 0), n);
        prop_assert_eq!(stash.get_str("n"), n.to_string());
    }
}
