// transeq-value - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for transeq-value integration tests.
//!
//! - [`init_logging`] - Route `log` output through `env_logger` in test mode
//! - [`ints`] - Build a vector value of integers
//! - [`realize`] - Realize any seqable value into a `Vec<Value>`

#[allow(unused_imports)]
pub use transeq_value::{DynFn, Value};

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A vector value of integers.
#[allow(dead_code)]
pub fn ints(ns: &[i64]) -> Value {
    Value::vector(ns.iter().copied().map(Value::Int))
}

/// Realize a seqable value.
///
/// # Panics
///
/// Panics if the value is not seqable or realization fails.
#[allow(dead_code)]
#[must_use]
pub fn realize(v: &Value) -> Vec<Value> {
    transeq_value::to_sequence(v)
        .and_then(|s| s.iter().collect())
        .expect("value realization failed")
}
