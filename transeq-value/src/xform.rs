// transeq-value - Transducers over values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Transducers whose functions are [`DynFn`] values. Each is the matching
//! `transeq_core::xform` transducer with the function invoked dynamically;
//! predicates use truthiness and `keep` drops `nil`.

use transeq_core::xform::{self, Cat, Comp, DropWhile, Filter, Keep, Map, PartitionBy, TakeWhile};

use crate::invoke::DynFn;
use crate::value::Value;

pub fn map(f: &DynFn) -> Map<Value, Value> {
    let f = f.clone();
    xform::try_map(move |x: Value| f.invoke(&[x]))
}

pub fn filter(pred: &DynFn) -> Filter<Value> {
    let pred = pred.clone();
    xform::try_filter(move |x: &Value| pred.test(std::slice::from_ref(x)))
}

pub fn remove(pred: &DynFn) -> Filter<Value> {
    let pred = pred.clone();
    xform::try_filter(move |x: &Value| pred.test(std::slice::from_ref(x)).map(|b| !b))
}

/// Keep the non-nil results of `f`.
pub fn keep(f: &DynFn) -> Keep<Value, Value> {
    let f = f.clone();
    Keep::fallible(move |x: Value| {
        let v = f.invoke(&[x])?;
        Ok(if v.is_nil() { None } else { Some(v) })
    })
}

pub fn take_while(pred: &DynFn) -> TakeWhile<Value> {
    let pred = pred.clone();
    xform::try_take_while(move |x: &Value| pred.test(std::slice::from_ref(x)))
}

pub fn drop_while(pred: &DynFn) -> DropWhile<Value> {
    let pred = pred.clone();
    xform::try_drop_while(move |x: &Value| pred.test(std::slice::from_ref(x)))
}

/// `map(f)` then `cat`. Each result of `f` must be seqable.
pub fn mapcat(f: &DynFn) -> Comp<Map<Value, Value>, Cat<Value, Value>, Value> {
    let f = f.clone();
    xform::try_mapcat(move |x: Value| f.invoke(&[x]))
}

/// Groups as plain vectors of values; see [`crate::seqs::partition_by`]
/// for groups as sequences.
pub fn partition_by(f: &DynFn) -> PartitionBy<Value, Value> {
    let f = f.clone();
    xform::try_partition_by(move |x: &Value| f.invoke(std::slice::from_ref(x)))
}
