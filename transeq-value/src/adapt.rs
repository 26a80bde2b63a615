// transeq-value - Dynamic adaptation
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime-typed conversion of values into sequences, and conjoining
//! elements onto value containers.

use transeq_core::{Error, InvocationKind, Result, Seq, Seqable};

use crate::value::Value;

// ============================================================================
// Values as sequences
// ============================================================================

/// View `val` as a sequence without realizing or mutating it.
///
/// - `Seq` is returned unchanged
/// - `Nil` is the empty sequence
/// - `Vector` yields its elements in order
/// - `Map` yields `[k v]` entry vectors in key order
/// - `Str` yields its characters
///
/// Anything else fails with [`Error::UnsupportedType`].
pub fn to_sequence(val: &Value) -> Result<Seq<Value>> {
    match val {
        Value::Seq(s) => Ok(s.clone()),
        Value::Nil => Ok(Seq::empty()),
        Value::Vector(items) => Ok(Seq::from(items.clone())),
        Value::Map(map) => {
            let entries: im::Vector<Value> = map
                .iter()
                .map(|(k, v)| entry(k.clone(), v.clone()))
                .collect();
            Ok(Seq::from(entries))
        }
        Value::Str(s) => {
            let chars: Vec<Value> = s.chars().map(Value::Char).collect();
            Ok(Seq::from(chars))
        }
        other => Err(Error::UnsupportedType(other.type_name())),
    }
}

impl Seqable<Value> for Value {
    fn seq(&self) -> Result<Seq<Value>> {
        to_sequence(self)
    }
}

fn entry(k: Value, v: Value) -> Value {
    Value::Vector(im::vector![k, v])
}

// ============================================================================
// Conjoining
// ============================================================================

/// Add `item` to `coll` in the position natural to its type: vectors append,
/// sequences prepend, and maps take a `[k v]` entry. Conjoining onto `nil`
/// gives a one-element sequence.
pub fn conj(coll: Value, item: Value) -> Result<Value> {
    match coll {
        Value::Vector(mut items) => {
            items.push_back(item);
            Ok(Value::Vector(items))
        }
        Value::Map(mut map) => {
            let (k, v) = map_entry(&item)?;
            map.insert(k, v);
            Ok(Value::Map(map))
        }
        Value::Seq(s) => Ok(Value::Seq(Seq::cons(item, s))),
        Value::Nil => Ok(Value::Seq(Seq::cons(item, Seq::empty()))),
        other => Err(Error::UnsupportedConjoinTarget(other.type_name())),
    }
}

fn map_entry(item: &Value) -> Result<(Value, Value)> {
    match item {
        Value::Vector(kv) if kv.len() == 2 => Ok((kv[0].clone(), kv[1].clone())),
        other => Err(Error::InvocationError {
            name: Some("conj".to_string()),
            kind: InvocationKind::ArgType {
                position: Some(2),
                expected: "map entry",
                got: other.type_name(),
            },
        }),
    }
}

/// Conjoin every element of `from` onto `to`.
pub fn into(to: Value, from: &Value) -> Result<Value> {
    let mut acc = to;
    for item in to_sequence(from)?.iter() {
        acc = conj(acc, item?)?;
    }
    Ok(acc)
}

/// Realize `coll` into a vector value.
pub fn to_vector(coll: &Value) -> Result<Value> {
    let items = to_sequence(coll)?
        .iter()
        .collect::<Result<im::Vector<Value>>>()?;
    Ok(Value::Vector(items))
}
