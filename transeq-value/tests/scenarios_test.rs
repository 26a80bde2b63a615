// transeq-value - End-to-end scenarios
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Whole pipelines mixing typed and dynamic sequences.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::*;
use transeq_core::{
    Seq, cons, count, cycle, dedupe, filter, interpose, iterate, keep, lazy_seq, map,
    partition_all, range_until, take, to_vec,
};
use transeq_value::{seqs, xform};

#[test]
fn test_readme_scenarios() {
    init_logging();
    assert_eq!(take(10, range_until(30i64)).render().unwrap(), "(0 1 2 3 4 5 6 7 8 9)");
    assert_eq!(take(7, cycle(range_until(3i64))).render().unwrap(), "(0 1 2 0 1 2 0)");
    assert_eq!(dedupe(vec![1i64, 1, 1, 2, 2, 3, 3, 3, 3]).render().unwrap(), "(1 2 3)");
    assert_eq!(
        partition_all(4, range_until(10i64)).render().unwrap(),
        "((0 1 2 3) (4 5 6 7) (8 9))"
    );
    assert_eq!(
        map(|x: i64| x + 1, filter(|x: &i64| x % 2 == 0, vec![1i64, 2, 3, 4]))
            .render()
            .unwrap(),
        "(3 5)"
    );
}

#[test]
fn test_deep_pipeline_over_infinite_source_runs_once_per_element() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let squares = map(
        move |x: u64| {
            counter.fetch_add(1, Ordering::SeqCst);
            x * x
        },
        iterate(|x: &u64| x + 1, 0),
    );
    let pipeline = take(5, partition_all(2, filter(|x: &u64| x % 2 == 1, squares.clone())));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(pipeline.render().unwrap(), "((1 9) (25 49) (81 121) (169 225) (289 361))");
    let after_first = calls.load(Ordering::SeqCst);
    assert_eq!(pipeline.render().unwrap(), "((1 9) (25 49) (81 121) (169 225) (289 361))");
    assert_eq!(calls.load(Ordering::SeqCst), after_first);

    // The shared upstream is memoized too
    assert_eq!(to_vec(take(3, squares)).unwrap(), vec![0, 1, 4]);
    assert_eq!(calls.load(Ordering::SeqCst), after_first);
}

#[test]
fn test_typed_and_dynamic_agree() {
    let words = Value::vector(["lazy", "seqs", "are", "fun"].map(Value::string));
    let long = DynFn::unary("long?", |s: String| s.len() > 3);
    let upper = DynFn::unary("upper", |s: String| s.to_uppercase());

    let dynamic = seqs::map(&upper, &seqs::filter(&long, &words).unwrap()).unwrap();
    let typed = map(
        |s: &'static str| s.to_uppercase(),
        filter(|s: &&'static str| s.len() > 3, vec!["lazy", "seqs", "are", "fun"]),
    );
    assert_eq!(dynamic.to_string(), typed.render().unwrap());
    assert_eq!(dynamic.to_string(), "(LAZY SEQS)");
}

#[test]
fn test_transduce_into_value_map() {
    let pair = DynFn::unary("pair", |c: char| vec![Value::Char(c), Value::Int(c as i64)]);
    let counted = seqs::transform_into(
        Value::Map(im::OrdMap::new()),
        &xform::map(&pair),
        &Value::string("aba"),
    )
    .unwrap();
    assert_eq!(counted.to_string(), "{a 97, b 98}");
}

#[test]
fn test_lazy_seq_interleaves_with_adapters() {
    fn countdown(n: i64) -> Seq<i64> {
        lazy_seq(move || {
            Ok(if n < 0 {
                Seq::empty()
            } else {
                cons(n, countdown(n - 1))
            })
        })
    }
    let s = interpose(-1, keep(|x: i64| (x % 2 == 0).then_some(x * 10), countdown(6)));
    assert_eq!(s.render().unwrap(), "(60 -1 40 -1 20 -1 0)");
    assert_eq!(count(s).unwrap(), 7);
}
