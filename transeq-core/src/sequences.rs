// transeq-core - Lazy sequence functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The lazy sequence library: each function pairs a transducer with
//! [`xfrm_sequence`], or builds a lazy sequence directly.
//!
//! Every function accepts anything convertible into a [`Seq`] and returns a
//! lazy `Seq`; nothing is pulled from the input until the result is used.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::cons::list_with_tail;
use crate::error::Result;
use crate::lazy::lazy_seq;
use crate::seq::{Element, Seq, Seqable};
use crate::xform::{self, TransducerExt};
use crate::xfrm::xfrm_sequence;

// ============================================================================
// Element-wise
// ============================================================================

pub fn map<In, Out, F>(f: F, coll: impl Into<Seq<In>>) -> Seq<Out>
where
    In: Element,
    Out: Element,
    F: Fn(In) -> Out + Send + Sync + 'static,
{
    xfrm_sequence(&xform::map(f), coll.into())
}

pub fn try_map<In, Out, F>(f: F, coll: impl Into<Seq<In>>) -> Seq<Out>
where
    In: Element,
    Out: Element,
    F: Fn(In) -> Result<Out> + Send + Sync + 'static,
{
    xfrm_sequence(&xform::try_map(f), coll.into())
}

pub fn map_indexed<In, Out, F>(f: F, coll: impl Into<Seq<In>>) -> Seq<Out>
where
    In: Element,
    Out: Element,
    F: Fn(usize, In) -> Out + Send + Sync + 'static,
{
    xfrm_sequence(&xform::map_indexed(f), coll.into())
}

pub fn keep<In, Out, F>(f: F, coll: impl Into<Seq<In>>) -> Seq<Out>
where
    In: Element,
    Out: Element,
    F: Fn(In) -> Option<Out> + Send + Sync + 'static,
{
    xfrm_sequence(&xform::keep(f), coll.into())
}

pub fn keep_indexed<In, Out, F>(f: F, coll: impl Into<Seq<In>>) -> Seq<Out>
where
    In: Element,
    Out: Element,
    F: Fn(usize, In) -> Option<Out> + Send + Sync + 'static,
{
    xfrm_sequence(&xform::keep_indexed(f), coll.into())
}

/// Swap elements found as keys in `smap` for their values.
pub fn replace<T>(smap: HashMap<T, T>, coll: impl Into<Seq<T>>) -> Seq<T>
where
    T: Element + Eq + Hash,
{
    xfrm_sequence(&xform::replace(smap), coll.into())
}

// ============================================================================
// Selection
// ============================================================================

pub fn filter<T, P>(pred: P, coll: impl Into<Seq<T>>) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    xfrm_sequence(&xform::filter(pred), coll.into())
}

pub fn try_filter<T, P>(pred: P, coll: impl Into<Seq<T>>) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> Result<bool> + Send + Sync + 'static,
{
    xfrm_sequence(&xform::try_filter(pred), coll.into())
}

pub fn remove<T, P>(pred: P, coll: impl Into<Seq<T>>) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    xfrm_sequence(&xform::remove(pred), coll.into())
}

pub fn dedupe<T: Element + PartialEq>(coll: impl Into<Seq<T>>) -> Seq<T> {
    xfrm_sequence(&xform::dedupe(), coll.into())
}

// ============================================================================
// Prefixes and suffixes
// ============================================================================

/// The first `n` elements.
pub fn take<T: Element>(n: usize, coll: impl Into<Seq<T>>) -> Seq<T> {
    if n == 0 {
        return Seq::empty();
    }
    xfrm_sequence(&xform::take(n), coll.into())
}

/// Every `n`th element, starting with the `n`th.
pub fn take_nth<T: Element>(n: usize, coll: impl Into<Seq<T>>) -> Seq<T> {
    if n == 0 {
        return Seq::empty();
    }
    xfrm_sequence(&xform::take_nth(n), coll.into())
}

pub fn take_while<T, P>(pred: P, coll: impl Into<Seq<T>>) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    xfrm_sequence(&xform::take_while(pred), coll.into())
}

/// All but the first `n` elements.
pub fn drop<T: Element>(n: usize, coll: impl Into<Seq<T>>) -> Seq<T> {
    xfrm_sequence(&xform::drop(n), coll.into())
}

pub fn drop_while<T, P>(pred: P, coll: impl Into<Seq<T>>) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    xfrm_sequence(&xform::drop_while(pred), coll.into())
}

/// `(take(n, coll) drop(n, coll))`
pub fn split_at<T: Element>(n: usize, coll: impl Into<Seq<T>>) -> Seq<Seq<T>> {
    let s = coll.into();
    Seq::cons(take(n, &s), Seq::cons(drop(n, s), Seq::empty()))
}

/// `(take_while(pred, coll) drop_while(pred, coll))`
pub fn split_with<T, P>(pred: P, coll: impl Into<Seq<T>>) -> Seq<Seq<T>>
where
    T: Element,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    let s = coll.into();
    let pred = Arc::new(pred);
    let keep_pred = Arc::clone(&pred);
    let taken = take_while(move |x: &T| keep_pred(x), &s);
    let dropped = drop_while(move |x: &T| pred(x), s);
    Seq::cons(taken, Seq::cons(dropped, Seq::empty()))
}

// ============================================================================
// Combining and splitting
// ============================================================================

/// Separate consecutive elements with `sep`.
pub fn interpose<T: Element>(sep: T, coll: impl Into<Seq<T>>) -> Seq<T> {
    xfrm_sequence(&xform::interpose(sep), coll.into())
}

/// The elements of each sequence in turn.
pub fn concat<T: Element>(colls: Vec<Seq<T>>) -> Seq<T> {
    xfrm_sequence(&xform::cat(), Seq::from(colls))
}

/// `f` applied to each element, results concatenated.
pub fn mapcat<In, C, Out, F>(f: F, coll: impl Into<Seq<In>>) -> Seq<Out>
where
    In: Element,
    C: Seqable<Out> + Element,
    Out: Element,
    F: Fn(In) -> C + Send + Sync + 'static,
{
    xfrm_sequence(&xform::mapcat(f), coll.into())
}

/// The first element of each sequence, then the second of each, and so on,
/// stopping as soon as any sequence runs out.
pub fn interleave<T: Element>(colls: Vec<Seq<T>>) -> Seq<T> {
    if colls.is_empty() {
        return Seq::empty();
    }
    lazy_seq(move || {
        let mut firsts = Vec::with_capacity(colls.len());
        let mut rests = Vec::with_capacity(colls.len());
        for coll in &colls {
            let coll = coll.resolve()?;
            let Some(item) = coll.first()? else {
                return Ok(Seq::empty());
            };
            firsts.push(item);
            rests.push(coll.rest()?);
        }
        Ok(list_with_tail(firsts.into_iter(), interleave(rests)))
    })
}

/// Groups of `n` consecutive elements; the last group may be shorter.
pub fn partition_all<T: Element>(n: usize, coll: impl Into<Seq<T>>) -> Seq<Seq<T>> {
    let xf = xform::partition_all::<T>(n).comp(xform::map(|group: Vec<T>| Seq::from(group)));
    xfrm_sequence(&xf, coll.into())
}

/// A new group starts each time `f` returns a different key.
pub fn partition_by<T, K, F>(f: F, coll: impl Into<Seq<T>>) -> Seq<Seq<T>>
where
    T: Element,
    K: PartialEq + Send + 'static,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    let xf = xform::partition_by(f).comp(xform::map(|group: Vec<T>| Seq::from(group)));
    xfrm_sequence(&xf, coll.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{range_between, range_until};
    use crate::reduce::to_vec;

    #[test]
    fn test_take_zero_pulls_nothing() {
        assert!(take(0, range_until(5i64)).is_empty());
    }

    #[test]
    fn test_split_at() {
        let parts = to_vec(split_at(2, range_until(5i64))).unwrap();
        assert_eq!(to_vec(&parts[0]).unwrap(), vec![0, 1]);
        assert_eq!(to_vec(&parts[1]).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn test_interleave_stops_at_shortest() {
        let s = interleave(vec![range_until(5i64), range_between(10, 12)]);
        assert_eq!(to_vec(s).unwrap(), vec![0, 10, 1, 11]);
        assert!(interleave(Vec::<Seq<i64>>::new()).is_empty());
    }

    #[test]
    fn test_concat_skips_empty() {
        let s = concat(vec![range_until(2i64), Seq::empty(), range_between(5, 7)]);
        assert_eq!(to_vec(s).unwrap(), vec![0, 1, 5, 6]);
    }
}
