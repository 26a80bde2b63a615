// transeq-value - Dynamic values for transeq
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # transeq-value
//!
//! A dynamically typed layer over `transeq-core` for callers whose element
//! types are only known at runtime.
//!
//! - [`Value`] is the loosely-typed element: scalars, persistent vectors and
//!   maps, sequences and functions
//! - [`to_sequence`] adapts vectors, maps, strings and `nil` into sequences
//! - [`conj`] and [`into`] collect elements back into value containers
//! - [`DynFn`] wraps native functions with arity and argument-type checks
//!   and doubles as a reducing function
//!
//! ## Quick Start
//!
//! ```rust
//! use transeq_value::{DynFn, Value, seqs};
//!
//! let inc = DynFn::unary("inc", |x: i64| x + 1);
//! let odd = DynFn::unary("odd?", |x: i64| x % 2 == 1);
//! let input = Value::vector((0..6).map(Value::Int));
//!
//! let evens_plus_one = seqs::map(&inc, &seqs::remove(&odd, &input).unwrap()).unwrap();
//! assert_eq!(evens_plus_one.to_string(), "(1 3 5)");
//! ```
//!
//! ## Reducing with a function value
//!
//! ```rust
//! use transeq_value::{DynFn, Value, seqs};
//!
//! let add = DynFn::binary("add", |a: i64, b: i64| a + b);
//! let total = seqs::reduce(&add, Value::Int(0), &Value::vector((1..=4).map(Value::Int)));
//! assert_eq!(total.unwrap(), Value::Int(10));
//! ```

mod adapt;
mod convert;
mod invoke;
pub mod seqs;
mod value;
pub mod xform;

pub use adapt::{conj, into, to_sequence, to_vector};
pub use convert::{FromValue, IntoValue, from_value, to_value};
pub use invoke::DynFn;
pub use value::Value;

// Re-export core types for convenience
pub use transeq_core::{AritySpec, Error, InvocationKind, Result, Seq};
