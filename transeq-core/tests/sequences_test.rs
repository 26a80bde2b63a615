// transeq-core - Sequence library integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the lazy sequence functions.

mod common;

use std::collections::HashMap;

use common::*;
use transeq_core::*;

// =============================================================================
// Generators
// =============================================================================

#[test]
fn test_take_from_range() {
    assert_renders!(take(10, range_until(30i64)), "(0 1 2 3 4 5 6 7 8 9)");
}

#[test]
fn test_range_laws() {
    assert_seq!(range(3i64, 7, 1), [3, 4, 5, 6]);
    assert_seq!(range(7i64, 3, -1), [7, 6, 5, 4]);
    assert!(range(4i64, 4, 0).is_empty());
    assert_seq!(take(3, range(4i64, 9, 0)), [4, 4, 4]);
}

#[test]
fn test_cycle_first_seven() {
    assert_renders!(take(7, cycle(range_until(3i64))), "(0 1 2 0 1 2 0)");
}

#[test]
fn test_cycle_of_lazy_source() {
    let evens = filter(|x: &i64| x % 2 == 0, range_until(5i64));
    assert_seq!(take(5, cycle(evens)), [0, 2, 4, 0, 2]);
}

#[test]
fn test_repeat() {
    assert_renders!(repeat(3, "foo"), "(foo foo foo)");
    assert_seq!(take(4, repeat_infinitely('a')), ['a', 'a', 'a', 'a']);
}

#[test]
fn test_iterate_double_sum() {
    let doubled = take(10, iterate(|x: &i64| x * 2, 2));
    assert_eq!(reduce(|acc, x| acc + x, 0i64, doubled).unwrap(), 2046);
}

// =============================================================================
// Transforming
// =============================================================================

#[test]
fn test_filter_then_map() {
    let s = map(|x: i64| x + 1, filter(|x: &i64| x % 2 == 0, vec![1i64, 2, 3, 4]));
    assert_renders!(s, "(3 5)");
}

#[test]
fn test_dedupe() {
    assert_renders!(dedupe(vec![1i64, 1, 1, 2, 2, 3, 3, 3, 3]), "(1 2 3)");
}

#[test]
fn test_partition_all() {
    assert_renders!(
        partition_all(4, range_until(10i64)),
        "((0 1 2 3) (4 5 6 7) (8 9))"
    );
}

#[test]
fn test_partition_by_odd() {
    let s = partition_by(|x: &i64| x % 2 == 1, vec![1i64, 1, 1, 2, 2, 3, 3]);
    assert_renders!(s, "((1 1 1) (2 2) (3 3))");
}

#[test]
fn test_take_nth() {
    assert_renders!(take_nth(4, range_until(30i64)), "(3 7 11 15 19 23 27)");
}

#[test]
fn test_keep_indexed() {
    let s = keep_indexed(
        |i, x: i64| if i % 2 == 1 { Some(x) } else { None },
        vec![0i64, 1, 2, 3],
    );
    assert_renders!(s, "(1 3)");
}

#[test]
fn test_keep_and_remove() {
    let halves = keep(|x: i64| if x % 2 == 0 { Some(x / 2) } else { None }, range_until(7i64));
    assert_seq!(halves, [0, 1, 2, 3]);
    assert_seq!(remove(|x: &i64| *x > 2, range_until(5i64)), [0, 1, 2]);
}

#[test]
fn test_map_indexed() {
    let s = map_indexed(|i, c: char| format!("{}:{}", i, c), "ab");
    assert_seq!(s, ["0:a".to_string(), "1:b".to_string()]);
}

#[test]
fn test_drop_and_while() {
    assert_seq!(drop(7, range_until(10i64)), [7, 8, 9]);
    assert_seq!(take_while(|x: &i64| *x < 3, range_until(100i64)), [0, 1, 2]);
    assert_seq!(
        take(3, drop_while(|x: &i64| *x < 50, range_until(1_000_000i64))),
        [50, 51, 52]
    );
}

#[test]
fn test_interpose() {
    assert_renders!(interpose(0i64, vec![1i64, 2, 3]), "(1 0 2 0 3)");
}

#[test]
fn test_replace() {
    let smap: HashMap<char, char> = [('a', 'A'), ('c', 'C')].into_iter().collect();
    assert_renders!(replace(smap, "abcd"), "(A b C d)");
}

#[test]
fn test_interleave_three() {
    let s = interleave(vec![
        range_until(5i64),
        range_between(10i64, 20),
        range_between(100i64, 103),
    ]);
    assert_renders!(s, "(0 10 100 1 11 101 2 12 102)");
}

#[test]
fn test_split_at() {
    let parts = split_at(9, range_until(20i64));
    assert_renders!(
        parts,
        "((0 1 2 3 4 5 6 7 8) (9 10 11 12 13 14 15 16 17 18 19))"
    );
}

#[test]
fn test_split_with() {
    let parts = split_with(|x: &i64| *x < 3, range_until(6i64));
    assert_renders!(parts, "((0 1 2) (3 4 5))");
}

#[test]
fn test_concat_and_mapcat() {
    let s = concat(vec![range_until(3i64), Seq::from(vec![7i64, 8])]);
    assert_renders!(s, "(0 1 2 7 8)");

    let s = mapcat(|x: i64| vec![x; x as usize], range_until(4i64));
    assert_renders!(s, "(1 2 2 3 3 3)");
}

#[test]
fn test_mapcat_over_infinite_source() {
    let s = mapcat(|x: i64| vec![x, -x], range_between(1i64, i64::MAX));
    assert_seq!(take(5, s), [1, -1, 2, -2, 3]);
}

#[test]
fn test_filter_mapcat_matches_eager() {
    let input: Vec<i64> = (0..20).collect();
    let lazy = mapcat(
        |x: i64| vec![x, x * 100],
        filter(|x: &i64| x % 3 == 0, input.clone()),
    );
    let eager: Vec<i64> = input
        .iter()
        .filter(|x| *x % 3 == 0)
        .flat_map(|&x| vec![x, x * 100])
        .collect();
    assert_eq!(collect(&lazy), eager);
}

#[test]
fn test_try_map_error_surfaces_at_pull() {
    let s = try_map(
        |x: i64| {
            if x == 3 {
                Err(Error::type_mismatch("small number", "three"))
            } else {
                Ok(x)
            }
        },
        range_until(10i64),
    );
    let results: Vec<Result<i64>> = s.iter().collect();
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(|r| r.is_ok()));
    assert!(results[3].as_ref().is_err_and(|e| e.is_invocation_error()));

    // Walking again reports the same failure at the same place
    let again: Vec<Result<i64>> = s.iter().collect();
    assert_eq!(again, results);
}

#[test]
fn test_try_filter() {
    let s = try_filter(|x: &i64| Ok(*x > 1), vec![0i64, 1, 2, 3]);
    assert_seq!(s, [2, 3]);
}

// =============================================================================
// Eager helpers and conversion
// =============================================================================

#[test]
fn test_reduce_cons_reverses() {
    let reversed = reduce(|acc, x| Seq::cons(x, acc), Seq::empty(), range_until(5i64)).unwrap();
    assert_renders!(reversed, "(4 3 2 1 0)");
}

#[test]
fn test_into_collections() {
    let v: Vec<i64> = into(Vec::new(), take(3, range_until(10i64))).unwrap();
    assert_eq!(v, vec![0, 1, 2]);

    let s = into(String::new(), map(|c: char| c.to_ascii_uppercase(), "shout")).unwrap();
    assert_eq!(s, "SHOUT");

    let pv = transform_into(
        im::Vector::new(),
        &xform::map(|x: i64| x * 10),
        range_until(3i64),
    )
    .unwrap();
    assert_eq!(pv, im::vector![0, 10, 20]);
}

#[test]
fn test_predicates() {
    assert!(every(|x: &i64| *x >= 0, range_until(10i64)).unwrap());
    assert!(some(|x: &i64| *x == 5, range_until(1_000_000_000i64)).unwrap());
    assert!(not_any(|x: &i64| *x < 0, range_until(10i64)).unwrap());
    assert!(not_every(|x: &i64| *x < 9, range_until(10i64)).unwrap());
}

#[test]
fn test_free_first_and_next() {
    let v = vec![5i64, 6];
    assert_eq!(first(&v).unwrap(), Some(5));
    assert_eq!(first(&next(&v).unwrap()).unwrap(), Some(6));
    assert!(next(&next(&v).unwrap()).unwrap().is_empty());
}

#[test]
fn test_print_length_on_infinite() {
    let previous = set_print_length(Some(4));
    let rendered = cycle(vec!['x', 'y']).render();
    set_print_length(previous);
    assert_eq!(rendered.unwrap(), "(x y x y ...)");
}

#[test]
fn test_bigint_range() {
    use num_bigint::BigInt;
    let start = BigInt::from(u64::MAX);
    let end = start.clone() + 3;
    let s = range_between(start.clone(), end);
    assert_eq!(count(&s).unwrap(), 3);
    assert_eq!(first(&s).unwrap(), Some(start));
}

// =============================================================================
// Long chains
// =============================================================================

#[test]
fn test_dropping_long_realized_chains() {
    const N: i64 = 1_000_000;

    let mapped = map(|x: i64| x + 1, range_until(N));
    assert_eq!(count(&mapped).unwrap(), N as usize);
    std::mem::drop(mapped);

    let naturals = iterate(|x: &i64| x + 1, 0);
    assert_eq!(count(take(N as usize, &naturals)).unwrap(), N as usize);
    std::mem::drop(naturals);

    let consed = into(Seq::empty(), range_until(N)).unwrap();
    assert_eq!(consed.first().unwrap(), Some(N - 1));
    std::mem::drop(consed);

    fn countdown(n: i64) -> Seq<i64> {
        lazy_seq(move || Ok(if n < 0 { Seq::empty() } else { cons(n, countdown(n - 1)) }))
    }
    let thunks = countdown(N);
    assert_eq!(count(&thunks).unwrap(), N as usize + 1);
    std::mem::drop(thunks);
}
