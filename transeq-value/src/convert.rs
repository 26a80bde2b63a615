// transeq-value - Type conversion traits
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type conversion between Rust types and [`Value`].
//!
//! [`IntoValue`] and [`FromValue`] are what let [`DynFn::unary`] and
//! [`DynFn::binary`] wrap ordinary Rust closures: arguments are converted
//! with `FromValue` (a failed conversion becomes an argument-type
//! invocation error) and the result with `IntoValue`.
//!
//! | Rust Type | Value |
//! |-----------|-------|
//! | `()` | `Nil` |
//! | `bool` | `Bool` |
//! | `i32`, `i64`, `usize` | `Int` |
//! | `f64` | `Float` |
//! | `char` | `Char` |
//! | `String`, `&str` | `Str` |
//! | `Vec<T>` | `Vector` |
//! | `Option<T>` | `T` or `Nil` |
//! | `Seq<Value>` | `Seq` |
//!
//! [`DynFn::unary`]: crate::DynFn::unary
//! [`DynFn::binary`]: crate::DynFn::binary

use std::sync::Arc;

use transeq_core::{Error, Result, Seq};

use crate::adapt::to_sequence;
use crate::value::Value;

/// Convert a Rust type into a `Value`.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Convert a `Value` into a Rust type.
pub trait FromValue: Sized {
    fn from_value(val: &Value) -> Result<Self>;
}

// ============================================================================
// IntoValue implementations
// ============================================================================

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Nil
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Int(self as i64)
    }
}

impl IntoValue for usize {
    fn into_value(self) -> Value {
        Value::Int(self as i64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Char(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for Arc<str> {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::vector(self.into_iter().map(IntoValue::into_value))
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Nil,
        }
    }
}

impl IntoValue for Seq<Value> {
    fn into_value(self) -> Value {
        Value::Seq(self)
    }
}

// ============================================================================
// FromValue implementations
// ============================================================================

impl FromValue for Value {
    fn from_value(val: &Value) -> Result<Self> {
        Ok(val.clone())
    }
}

impl FromValue for () {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Nil => Ok(()),
            other => Err(Error::type_mismatch("nil", other.type_name())),
        }
    }
}

impl FromValue for bool {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("bool", other.type_name())),
        }
    }
}

impl FromValue for i64 {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Int(n) => Ok(*n),
            other => Err(Error::type_mismatch("int", other.type_name())),
        }
    }
}

impl FromValue for i32 {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Int(n) => i32::try_from(*n).map_err(|_| Error::type_mismatch("i32", "int")),
            other => Err(Error::type_mismatch("int", other.type_name())),
        }
    }
}

impl FromValue for usize {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Int(n) => {
                usize::try_from(*n).map_err(|_| Error::type_mismatch("non-negative int", "int"))
            }
            other => Err(Error::type_mismatch("int", other.type_name())),
        }
    }
}

impl FromValue for f64 {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Float(n) => Ok(*n),
            Value::Int(n) => Ok(*n as f64),
            other => Err(Error::type_mismatch("number", other.type_name())),
        }
    }
}

impl FromValue for char {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Char(c) => Ok(*c),
            other => Err(Error::type_mismatch("char", other.type_name())),
        }
    }
}

impl FromValue for String {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Str(s) => Ok(s.to_string()),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Vector(items) => items.iter().map(T::from_value).collect(),
            other => Err(Error::type_mismatch("vector", other.type_name())),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Anything seqable converts; the sequence is not realized.
impl FromValue for Seq<Value> {
    fn from_value(val: &Value) -> Result<Self> {
        to_sequence(val).map_err(|e| match e {
            Error::UnsupportedType(got) => Error::type_mismatch("seqable", got),
            other => other,
        })
    }
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Convert a Rust value to a `Value`.
pub fn to_value<T: IntoValue>(val: T) -> Value {
    val.into_value()
}

/// Convert a `Value` to a Rust value.
pub fn from_value<T: FromValue>(val: &Value) -> Result<T> {
    T::from_value(val)
}
