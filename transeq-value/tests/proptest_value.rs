// transeq-value - Property-based tests for dynamic adaptation
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for value adaptation.
//!
//! Tests the following properties:
//! - vectors, strings and maps walk in the same order as their Rust sources
//! - `into` an empty vector is the identity on vectors
//! - dynamic pipelines agree with typed pipelines
//! - `Value` ordering is a total order consistent with equality

mod common;

use common::*;
use proptest::prelude::*;
use transeq_value::{IntoValue, from_value, into, seqs, to_value};

// =============================================================================
// Strategies
// =============================================================================

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        any::<char>().prop_map(Value::Char),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::vector),
            prop::collection::vec((inner.clone(), inner), 0..4).prop_map(Value::map),
        ]
    })
}

// =============================================================================
// Adaptation order
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn int_vector_walks_in_order(v in prop::collection::vec(any::<i64>(), 0..30)) {
        let walked: Vec<i64> = realize(&to_value(v.clone()))
            .iter()
            .map(|x| from_value(x).unwrap())
            .collect();
        prop_assert_eq!(walked, v);
    }

    #[test]
    fn string_vector_walks_in_order(v in prop::collection::vec("[a-zA-Z0-9 ]{0,10}", 0..20)) {
        let walked: Vec<String> = realize(&v.clone().into_value())
            .iter()
            .map(|x| from_value(x).unwrap())
            .collect();
        prop_assert_eq!(walked, v);
    }

    #[test]
    fn string_walks_code_points(s in "\\PC{0,20}") {
        let walked: Vec<char> = realize(&Value::string(s.as_str()))
            .iter()
            .map(|x| from_value(x).unwrap())
            .collect();
        prop_assert_eq!(walked, s.chars().collect::<Vec<_>>());
    }

    #[test]
    fn into_empty_vector_is_identity(v in prop::collection::vec(arb_value(), 0..10)) {
        let original = Value::vector(v);
        let copied = into(Value::vector(Vec::new()), &original).unwrap();
        prop_assert_eq!(copied, original);
    }
}

// =============================================================================
// Dynamic and typed pipelines agree
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn filter_map_matches_typed(v in prop::collection::vec(-1000i64..1000, 0..40)) {
        let even = DynFn::unary("even?", |x: i64| x % 2 == 0);
        let inc = DynFn::unary("inc", |x: i64| x + 1);
        let dynamic = seqs::map(&inc, &seqs::filter(&even, &ints(&v)).unwrap()).unwrap();
        let dynamic: Vec<i64> = realize(&dynamic)
            .iter()
            .map(|x| from_value(x).unwrap())
            .collect();

        let typed = transeq_core::map(|x: i64| x + 1, transeq_core::filter(|x: &i64| x % 2 == 0, v));
        prop_assert_eq!(dynamic, transeq_core::to_vec(typed).unwrap());
    }
}

// =============================================================================
// Ordering
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn ordering_is_consistent(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
        prop_assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
    }
}
