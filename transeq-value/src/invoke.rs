// transeq-value - Dynamic invocation
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Functions as values.
//!
//! A [`DynFn`] is a named native function with a declared [`AritySpec`].
//! Calls are checked against the arity before the function runs; typed
//! constructors convert arguments with [`FromValue`] and report the failing
//! argument's position. `DynFn` also acts as a [`Reducer`] so that dynamic
//! pipelines can be reduced and transduced with a plain function value.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use transeq_core::{AritySpec, Error, Reducer, Reduction, Result};

use crate::convert::{FromValue, IntoValue};
use crate::value::Value;

type NativeFnImpl = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A named, arity-checked native function.
#[derive(Clone)]
pub struct DynFn {
    name: Arc<str>,
    arity: AritySpec,
    func: Arc<NativeFnImpl>,
}

impl DynFn {
    /// Wrap a function over raw argument slices. `func` only ever sees
    /// argument counts accepted by `arity`.
    pub fn native(
        name: &str,
        arity: AritySpec,
        func: impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        DynFn {
            name: Arc::from(name),
            arity,
            func: Arc::new(func),
        }
    }

    /// Wrap a one-argument Rust function.
    pub fn unary<A, R, F>(name: &str, f: F) -> Self
    where
        A: FromValue,
        R: IntoValue,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::try_unary(name, move |a| Ok(f(a)))
    }

    /// Wrap a fallible one-argument Rust function.
    pub fn try_unary<A, R, F>(name: &str, f: F) -> Self
    where
        A: FromValue,
        R: IntoValue,
        F: Fn(A) -> Result<R> + Send + Sync + 'static,
    {
        Self::native(name, AritySpec::Exact(1), move |args| {
            let a = arg::<A>(args, 0)?;
            f(a).map(IntoValue::into_value)
        })
    }

    /// Wrap a two-argument Rust function.
    pub fn binary<A, B, R, F>(name: &str, f: F) -> Self
    where
        A: FromValue,
        B: FromValue,
        R: IntoValue,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        Self::native(name, AritySpec::Exact(2), move |args| {
            let a = arg::<A>(args, 0)?;
            let b = arg::<B>(args, 1)?;
            Ok(f(a, b).into_value())
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> AritySpec {
        self.arity
    }

    /// Call with `args`, checking arity first. Errors raised inside the
    /// function are tagged with this function's name.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        if !self.arity.accepts(args.len()) {
            log::debug!("'{}' called with {} arguments", self.name, args.len());
            return Err(Error::arity_named(&*self.name, self.arity, args.len()));
        }
        (self.func)(args).map_err(|e| e.in_fn(&self.name))
    }

    /// Call and treat the result as a boolean.
    pub fn test(&self, args: &[Value]) -> Result<bool> {
        self.invoke(args).map(|v| v.is_truthy())
    }
}

/// Convert argument `pos`, recording its 1-based position on failure.
fn arg<A: FromValue>(args: &[Value], pos: usize) -> Result<A> {
    let val = args
        .get(pos)
        .ok_or_else(|| Error::type_mismatch("argument", "nothing"))?;
    A::from_value(val).map_err(|e| e.at_position(pos + 1))
}

impl fmt::Debug for DynFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<fn {}>", self.name)
    }
}

impl PartialEq for DynFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Eq for DynFn {}

impl PartialOrd for DynFn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DynFn {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = Arc::as_ptr(&self.func) as *const () as usize;
        let b = Arc::as_ptr(&other.func) as *const () as usize;
        self.name.cmp(&other.name).then(a.cmp(&b))
    }
}

// ============================================================================
// Invoking values
// ============================================================================

impl Value {
    /// Invoke a function value. Anything else is not callable.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        match self {
            Value::Fn(f) => f.invoke(args),
            other => Err(Error::not_callable(other.type_name())),
        }
    }
}

// ============================================================================
// DynFn as a reducing function
// ============================================================================

/// The 0-arity call supplies `init`, the 2-arity call is `step` and the
/// 1-arity call is `complete`. A `Value::Reduced` result from `step` stops
/// the reduction. Missing arities fall back to the identity for `complete`
/// and to an error for `init`.
impl Reducer<Value, Value> for DynFn {
    fn init(&mut self) -> Result<Value> {
        if self.arity.accepts(0) {
            self.invoke(&[])
        } else {
            Err(Error::no_init().in_fn(&self.name))
        }
    }

    fn step(&mut self, acc: Value, item: Value) -> Result<Reduction<Value>> {
        match self.invoke(&[acc, item])? {
            Value::Reduced(v) => Ok(Reduction::Reduced(*v)),
            v => Ok(Reduction::Continue(v)),
        }
    }

    fn complete(&mut self, acc: Value) -> Result<Value> {
        if self.arity.accepts(1) {
            self.invoke(&[acc])
        } else {
            Ok(acc)
        }
    }
}
