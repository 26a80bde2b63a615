// transeq-value - Dynamic values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The loosely-typed value flowing through dynamic pipelines.
//!
//! `Value` is what a caller reaches for when element types are only known
//! at runtime: heterogeneous vectors, maps keyed by mixed types, sequences
//! of sequences, and functions carried around as data. Collections are
//! persistent (`im`), so cloning a value is cheap and never copies elements.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use transeq_core::Seq;

use crate::invoke::DynFn;

/// A dynamically typed value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(Arc<str>),
    Vector(im::Vector<Value>),
    Map(im::OrdMap<Value, Value>),
    Seq(Seq<Value>),
    Fn(DynFn),
    /// Early-termination marker returned by a dynamic reducing function
    Reduced(Box<Value>),
}

impl Value {
    // Convenience constructors

    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn vector(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Vector(items.into_iter().collect())
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    pub fn seq(s: Seq<Value>) -> Self {
        Value::Seq(s)
    }

    /// Wrap `v` so a dynamic reduction stops after this step.
    pub fn reduced(v: Value) -> Self {
        Value::Reduced(Box::new(v))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_reduced(&self) -> bool {
        matches!(self, Value::Reduced(_))
    }

    /// Check if this value is truthy (not nil and not false)
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Vector(_) => "vector",
            Value::Map(_) => "map",
            Value::Seq(_) => "seq",
            Value::Fn(_) => "fn",
            Value::Reduced(_) => "reduced",
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "##NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "##Inf")
                    } else {
                        write!(f, "##-Inf")
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{}.0", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Char(c) => write!(f, "{}", c),
            Value::Str(s) => write!(f, "{}", s),
            Value::Vector(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Seq(s) => write!(f, "{}", s),
            Value::Fn(func) => write!(f, "#<fn {}>", func.name()),
            Value::Reduced(v) => write!(f, "#reduced[{}]", v),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug must not realize anything
            Value::Seq(s) => write!(f, "{:?}", s),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Char(c) => write!(f, "{:?}", c),
            _ => write!(f, "{}", self),
        }
    }
}

// ============================================================================
// Equality and ordering (for use as map keys)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        // Type ordering for heterogeneous comparison
        fn type_order(v: &Value) -> u8 {
            match v {
                Value::Nil => 0,
                Value::Bool(_) => 1,
                Value::Int(_) | Value::Float(_) => 2,
                Value::Char(_) => 3,
                Value::Str(_) => 4,
                Value::Vector(_) => 5,
                Value::Map(_) => 6,
                Value::Seq(_) => 7,
                Value::Fn(_) => 8,
                Value::Reduced(_) => 9,
            }
        }

        let ta = type_order(self);
        let tb = type_order(other);
        if ta != tb {
            return ta.cmp(&tb);
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
            (Value::Char(a), Value::Char(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Vector(a), Value::Vector(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a.iter().cmp(b.iter()),
            // Sequences are compared by identity; comparing contents could
            // realize an infinite sequence
            (Value::Seq(a), Value::Seq(b)) => a.addr().cmp(&b.addr()),
            (Value::Fn(a), Value::Fn(b)) => a.cmp(b),
            (Value::Reduced(a), Value::Reduced(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// From impls
// ============================================================================

impl From<Seq<Value>> for Value {
    fn from(s: Seq<Value>) -> Self {
        Value::Seq(s)
    }
}

impl From<DynFn> for Value {
    fn from(f: DynFn) -> Self {
        Value::Fn(f)
    }
}
