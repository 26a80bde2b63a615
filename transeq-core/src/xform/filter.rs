// transeq-core - Selecting transducers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::marker::PhantomData;
use std::sync::Arc;

use super::{Pred, Transducer};
use crate::error::Result;
use crate::reducer::{BoxReducer, Reducer, Reduction};

pub struct Filter<T> {
    pred: Pred<T>,
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Filter {
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Keep the elements for which `pred` holds.
pub fn filter<T, P>(pred: P) -> Filter<T>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Filter {
        pred: Arc::new(move |x| Ok(pred(x))),
    }
}

/// Keep the elements for which a fallible `pred` holds.
pub fn try_filter<T, P>(pred: P) -> Filter<T>
where
    P: Fn(&T) -> Result<bool> + Send + Sync + 'static,
{
    Filter {
        pred: Arc::new(pred),
    }
}

/// Drop the elements for which `pred` holds.
pub fn remove<T, P>(pred: P) -> Filter<T>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Filter {
        pred: Arc::new(move |x| Ok(!pred(x))),
    }
}

struct FilterStep<R, T> {
    rf: R,
    pred: Pred<T>,
}

impl<A, T, R: Reducer<A, T>> Reducer<A, T> for FilterStep<R, T> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if (self.pred)(&item)? {
            self.rf.step(acc, item)
        } else {
            Ok(Reduction::Continue(acc))
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: 'static> Transducer<T, T> for Filter<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(FilterStep {
            rf,
            pred: Arc::clone(&self.pred),
        })
    }
}

/// Collapses runs of equal consecutive elements to one.
pub struct Dedupe<T>(PhantomData<fn(T) -> T>);

impl<T> Clone for Dedupe<T> {
    fn clone(&self) -> Self {
        Dedupe(PhantomData)
    }
}

pub fn dedupe<T: PartialEq + Clone>() -> Dedupe<T> {
    Dedupe(PhantomData)
}

struct DedupeStep<R, T> {
    rf: R,
    prior: Option<T>,
}

impl<A, T, R> Reducer<A, T> for DedupeStep<R, T>
where
    T: PartialEq + Clone + Send,
    R: Reducer<A, T>,
{
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if self.prior.as_ref() == Some(&item) {
            return Ok(Reduction::Continue(acc));
        }
        self.prior = Some(item.clone());
        self.rf.step(acc, item)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: PartialEq + Clone + Send + 'static> Transducer<T, T> for Dedupe<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(DedupeStep { rf, prior: None })
    }
}
