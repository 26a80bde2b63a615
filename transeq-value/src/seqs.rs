// transeq-value - Dynamic sequence functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence functions over [`Value`] collections and [`DynFn`] functions.
//!
//! The lazy functions return `Value::Seq` and fail up front only if `coll`
//! is not seqable; everything else (including invocation errors) surfaces
//! when the result is realized. The eager functions realize their input
//! immediately.

use transeq_core::{
    Reducer, Reduction, Result, Seq, Transducer, TransducerExt, reduce_with, transduce_with,
    try_iterate, xfrm_sequence,
};

use crate::adapt::{conj, to_sequence};
use crate::invoke::DynFn;
use crate::value::Value;
use crate::xform;

fn lazily<X>(xf: &X, coll: &Value) -> Result<Value>
where
    X: Transducer<Value, Value> + ?Sized,
{
    Ok(Value::Seq(xfrm_sequence(xf, to_sequence(coll)?)))
}

// ============================================================================
// Lazy
// ============================================================================

pub fn map(f: &DynFn, coll: &Value) -> Result<Value> {
    lazily(&xform::map(f), coll)
}

pub fn filter(pred: &DynFn, coll: &Value) -> Result<Value> {
    lazily(&xform::filter(pred), coll)
}

pub fn remove(pred: &DynFn, coll: &Value) -> Result<Value> {
    lazily(&xform::remove(pred), coll)
}

pub fn keep(f: &DynFn, coll: &Value) -> Result<Value> {
    lazily(&xform::keep(f), coll)
}

pub fn take_while(pred: &DynFn, coll: &Value) -> Result<Value> {
    lazily(&xform::take_while(pred), coll)
}

pub fn drop_while(pred: &DynFn, coll: &Value) -> Result<Value> {
    lazily(&xform::drop_while(pred), coll)
}

pub fn mapcat(f: &DynFn, coll: &Value) -> Result<Value> {
    lazily(&xform::mapcat(f), coll)
}

/// Groups are `Value::Seq`s.
pub fn partition_by(f: &DynFn, coll: &Value) -> Result<Value> {
    let xf = xform::partition_by(f)
        .comp(transeq_core::xform::map(|group: Vec<Value>| Value::Seq(Seq::from(group))));
    lazily(&xf, coll)
}

/// `seed, f(seed), f(f(seed)), ...`
pub fn iterate(f: &DynFn, seed: Value) -> Value {
    let f = f.clone();
    Value::Seq(try_iterate(
        move |x: &Value| f.invoke(std::slice::from_ref(x)),
        seed,
    ))
}

// ============================================================================
// Eager
// ============================================================================

/// Fold `f` over `coll`. A `Value::Reduced` result from `f` stops the fold
/// early; `complete` is not called.
pub fn reduce(f: &DynFn, init: Value, coll: &Value) -> Result<Value> {
    let mut rf = f.clone();
    reduce_with(&mut rf, init, to_sequence(coll)?).map(Reduction::unreduced)
}

/// Reduce `coll` through `xf` into `f`. Without an `init`, `f` is called
/// with no arguments to supply one.
pub fn transduce<X>(xf: &X, f: &DynFn, init: Option<Value>, coll: &Value) -> Result<Value>
where
    X: Transducer<Value, Value> + ?Sized,
{
    let mut rf = f.clone();
    let init = match init {
        Some(v) => v,
        None => rf.init()?,
    };
    transduce_with(xf, rf, init, to_sequence(coll)?)
}

/// Reducer conjoining onto a value container.
struct ConjInto;

impl Reducer<Value, Value> for ConjInto {
    fn init(&mut self) -> Result<Value> {
        Ok(Value::Vector(im::Vector::new()))
    }

    fn step(&mut self, acc: Value, item: Value) -> Result<Reduction<Value>> {
        conj(acc, item).map(Reduction::Continue)
    }

    fn complete(&mut self, acc: Value) -> Result<Value> {
        Ok(acc)
    }
}

/// Conjoin every element of `from`, transformed by `xf`, onto `to`.
pub fn transform_into<X>(to: Value, xf: &X, from: &Value) -> Result<Value>
where
    X: Transducer<Value, Value> + ?Sized,
{
    transduce_with(xf, ConjInto, to, to_sequence(from)?)
}

/// True if `pred` is truthy for every element. Stops at the first failure.
pub fn every(pred: &DynFn, coll: &Value) -> Result<bool> {
    for item in to_sequence(coll)?.iter() {
        if !pred.test(&[item?])? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if `pred` is truthy for some element. Stops at the first success.
pub fn some(pred: &DynFn, coll: &Value) -> Result<bool> {
    for item in to_sequence(coll)?.iter() {
        if pred.test(&[item?])? {
            return Ok(true);
        }
    }
    Ok(false)
}
