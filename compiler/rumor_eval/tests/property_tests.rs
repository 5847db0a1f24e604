//! Property-based tests for scope persistence.
//!
//! For any set of bindings, inserted in any order:
//! 1. decode(encode(scope)) holds exactly the same bindings
//! 2. the encoding does not depend on insertion order

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::collections::BTreeMap;

use proptest::prelude::*;
use rumor_eval::{Scope, Value};

/// Any value, NaN included.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::Int),
        any::<f32>().prop_map(Value::Float),
        Just(Value::Float(f32::NAN)),
        ".{0,24}".prop_map(Value::string),
    ]
}

fn bindings_strategy() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("[a-z_][a-z0-9_]{0,11}", value_strategy(), 0..16)
}

fn scope_from(bindings: impl IntoIterator<Item = (String, Value)>) -> Scope {
    let mut scope = Scope::new();
    for (name, value) in bindings {
        scope.set_var(name, value);
    }
    scope
}

proptest! {
    #[test]
    fn scope_roundtrip(bindings in bindings_strategy()) {
        let scope = scope_from(bindings.clone());
        let decoded = Scope::decode(&scope.encode().unwrap()).unwrap();

        prop_assert_eq!(decoded.len(), bindings.len());
        for (name, value) in &bindings {
            prop_assert_eq!(decoded.get_var(name), Some(value));
        }
    }

    #[test]
    fn encoding_ignores_insertion_order(bindings in bindings_strategy()) {
        let forward = scope_from(bindings.clone());
        let backward = scope_from(bindings.into_iter().rev());
        prop_assert_eq!(forward.encode().unwrap(), backward.encode().unwrap());
    }

    #[test]
    fn clear_empties_scope(bindings in bindings_strategy(), recursive in any::<bool>()) {
        let mut scope = scope_from(bindings.clone());
        scope.clear(recursive);
        prop_assert_eq!(&scope, &Scope::new());
        for name in bindings.keys() {
            prop_assert!(!scope.has_var(name));
        }
    }
}
