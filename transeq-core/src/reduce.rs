// transeq-core - Eager drivers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Reduce, transduce, and the eager helpers built on them. These are the
//! only operations that realize a whole sequence.

use crate::adapt::Conj;
use crate::error::Result;
use crate::reducer::{Reducer, Reduction, completing};
use crate::seq::{Element, Seq};
use crate::xform::Transducer;

/// Fold `f` over every element of `coll`, starting from `init`.
pub fn reduce<T, A, F>(mut f: F, init: A, coll: impl Into<Seq<T>>) -> Result<A>
where
    T: Element,
    F: FnMut(A, T) -> A,
{
    let mut acc = init;
    for item in coll.into().iter() {
        acc = f(acc, item?);
    }
    Ok(acc)
}

/// Fold with a reducer's `step`, stopping at the first `Reduced`.
/// Does not call `complete`.
pub fn reduce_with<A, E, R>(rf: &mut R, init: A, coll: Seq<E>) -> Result<Reduction<A>>
where
    E: Element,
    R: Reducer<A, E> + ?Sized,
{
    let mut acc = init;
    for item in coll.iter() {
        match rf.step(acc, item?)? {
            Reduction::Continue(next) => acc = next,
            reduced @ Reduction::Reduced(_) => return Ok(reduced),
        }
    }
    Ok(Reduction::Continue(acc))
}

/// Reduce `coll` through `xf` with the fold function `f`.
pub fn transduce<In, Out, A, X, F>(xf: &X, f: F, init: A, coll: impl Into<Seq<In>>) -> Result<A>
where
    In: Element,
    Out: 'static,
    A: 'static,
    X: Transducer<In, Out> + ?Sized,
    F: FnMut(A, Out) -> A + Send + 'static,
{
    transduce_with(xf, completing(f), init, coll)
}

/// Reduce `coll` through `xf` into `rf`, then call `complete` once.
pub fn transduce_with<In, Out, A, X, R>(xf: &X, rf: R, init: A, coll: impl Into<Seq<In>>) -> Result<A>
where
    In: Element,
    A: 'static,
    X: Transducer<In, Out> + ?Sized,
    R: Reducer<A, Out> + 'static,
{
    let mut xrf = xf.apply(rf);
    let acc = reduce_with(&mut xrf, init, coll.into())?.unreduced();
    xrf.complete(acc)
}

/// Realize every element into a `Vec`.
pub fn to_vec<T: Element>(coll: impl Into<Seq<T>>) -> Result<Vec<T>> {
    coll.into().iter().collect()
}

/// Number of elements. Realizes the whole sequence.
pub fn count<T: Element>(coll: impl Into<Seq<T>>) -> Result<usize> {
    reduce(|n, _| n + 1, 0, coll)
}

/// Conjoin every element of `from` onto `to`.
pub fn into<T: Element, C: Conj<T>>(to: C, from: impl Into<Seq<T>>) -> Result<C> {
    reduce(<C as Conj<T>>::conj, to, from)
}

/// Conjoin every element of `from`, transformed by `xf`, onto `to`.
pub fn transform_into<In, Out, C, X>(to: C, xf: &X, from: impl Into<Seq<In>>) -> Result<C>
where
    In: Element,
    Out: 'static,
    C: Conj<Out> + Send + 'static,
    X: Transducer<In, Out> + ?Sized,
{
    transduce(xf, <C as Conj<Out>>::conj, to, from)
}

/// True if `pred` holds for every element. Stops at the first failure.
pub fn every<T: Element>(mut pred: impl FnMut(&T) -> bool, coll: impl Into<Seq<T>>) -> Result<bool> {
    for item in coll.into().iter() {
        if !pred(&item?) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if `pred` holds for some element. Stops at the first success.
pub fn some<T: Element>(mut pred: impl FnMut(&T) -> bool, coll: impl Into<Seq<T>>) -> Result<bool> {
    for item in coll.into().iter() {
        if pred(&item?) {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn not_every<T: Element>(pred: impl FnMut(&T) -> bool, coll: impl Into<Seq<T>>) -> Result<bool> {
    every(pred, coll).map(|b| !b)
}

pub fn not_any<T: Element>(pred: impl FnMut(&T) -> bool, coll: impl Into<Seq<T>>) -> Result<bool> {
    some(pred, coll).map(|b| !b)
}

/// Realize every element for its side effects.
pub fn do_run<T: Element>(coll: impl Into<Seq<T>>) -> Result<()> {
    let mut cursor = coll.into().resolve()?;
    while !cursor.is_empty() {
        cursor = cursor.next()?;
    }
    Ok(())
}

/// Realize every element and return the (now realized) sequence.
pub fn do_all<T: Element>(coll: impl Into<Seq<T>>) -> Result<Seq<T>> {
    let seq = coll.into();
    do_run(seq.clone())?;
    Ok(seq)
}
