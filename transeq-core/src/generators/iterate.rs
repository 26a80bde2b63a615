// transeq-core - Function iteration
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! `x, f(x), f(f(x)), ...` as a forward-only chain of memoizing nodes.
//!
//! Each node computes its value from its predecessor's on first demand and
//! builds its successor at most once, so `f` runs once per position no
//! matter how often the chain is walked.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::seq::{Element, Seq, Sequence};

type StepFn<T> = Arc<dyn Fn(&T) -> Result<T> + Send + Sync>;

enum Value<T> {
    /// Not computed yet: holds the previous value
    Pending(T),
    Realized(T),
}

struct IterateState<T> {
    value: Value<T>,
    next: Option<Seq<T>>,
}

struct Iterate<T> {
    f: StepFn<T>,
    state: Mutex<IterateState<T>>,
}

impl<T: Element> Iterate<T> {
    fn new(f: StepFn<T>, value: Value<T>) -> Self {
        Iterate {
            f,
            state: Mutex::new(IterateState { value, next: None }),
        }
    }

    fn current(f: &StepFn<T>, state: &mut IterateState<T>) -> Result<T> {
        let computed = match &state.value {
            Value::Realized(v) => return Ok(v.clone()),
            Value::Pending(prev) => f(prev)?,
        };
        state.value = Value::Realized(computed.clone());
        Ok(computed)
    }
}

impl<T: Element> Sequence<T> for Iterate<T> {
    fn first(&self) -> Result<Option<T>> {
        let mut state = self.state.lock().map_err(|_| Error::Poisoned("iterate"))?;
        Self::current(&self.f, &mut state).map(Some)
    }

    fn rest(&self) -> Result<Seq<T>> {
        let mut state = self.state.lock().map_err(|_| Error::Poisoned("iterate"))?;
        if let Some(next) = &state.next {
            return Ok(next.clone());
        }
        let current = Self::current(&self.f, &mut state)?;
        let next = Seq::from_node(Iterate::new(Arc::clone(&self.f), Value::Pending(current)));
        state.next = Some(next.clone());
        Ok(next)
    }

    fn is_realized(&self) -> bool {
        self.state
            .lock()
            .is_ok_and(|state| matches!(state.value, Value::Realized(_)))
    }

    fn detach_tail(&mut self) -> Option<Seq<T>> {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .next
            .take()
    }
}

/// `x, f(x), f(f(x)), ...`
pub fn iterate<T, F>(f: F, x: T) -> Seq<T>
where
    T: Element,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    try_iterate(move |v| Ok(f(v)), x)
}

/// Like [`iterate`], with a step that may fail. A failure leaves the node
/// unrealized and is returned from whichever call forced it.
pub fn try_iterate<T, F>(f: F, x: T) -> Seq<T>
where
    T: Element,
    F: Fn(&T) -> Result<T> + Send + Sync + 'static,
{
    Seq::from_node(Iterate::new(Arc::new(f), Value::Realized(x)))
}
