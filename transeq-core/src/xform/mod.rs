// transeq-core - Transducers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Transducers: reusable transformations of reducing functions.
//!
//! A transducer turns a reducer over `Out` elements into a reducer over `In`
//! elements. Applying it never runs user code; all per-run state (counters,
//! partition buffers) lives in the reducer it returns, so one transducer can
//! drive any number of independent reductions.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::reducer::{BoxReducer, Reducer};

mod cat;
mod filter;
mod map;
mod partition;
mod take;

pub use cat::{Cat, Interpose, cat, interpose, mapcat, try_mapcat};
pub use filter::{Dedupe, Filter, dedupe, filter, remove, try_filter};
pub use map::{Keep, KeepIndexed, Map, MapIndexed, Replace, keep, keep_indexed, map, map_indexed, replace, try_map};
pub use partition::{PartitionAll, PartitionBy, partition_all, partition_by, try_partition_by};
pub use take::{
    DropN, DropWhile, Take, TakeNth, TakeWhile, drop, drop_while, take, take_nth, take_while,
    try_drop_while, try_take_while,
};

/// Shared fallible predicate.
pub(crate) type Pred<T> = Arc<dyn Fn(&T) -> Result<bool> + Send + Sync>;

/// A transformation of reducing functions.
pub trait Transducer<In, Out> {
    /// Wrap `rf` so that it accepts `In` elements.
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, In>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static;
}

impl<In, Out, X: Transducer<In, Out> + ?Sized> Transducer<In, Out> for &X {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, In>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static,
    {
        (**self).apply(rf)
    }
}

/// Two transducers run in sequence: `first` sees the input, `second` sees
/// what `first` emits.
pub struct Comp<X1, X2, Mid> {
    first: X1,
    second: X2,
    _mid: PhantomData<fn(Mid) -> Mid>,
}

impl<In, Mid, Out, X1, X2> Transducer<In, Out> for Comp<X1, X2, Mid>
where
    X1: Transducer<In, Mid>,
    X2: Transducer<Mid, Out>,
    Mid: 'static,
{
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, In>
    where
        A: 'static,
        R: Reducer<A, Out> + 'static,
    {
        self.first.apply(self.second.apply(rf))
    }
}

impl<X1: Clone, X2: Clone, Mid> Clone for Comp<X1, X2, Mid> {
    fn clone(&self) -> Self {
        Comp {
            first: self.first.clone(),
            second: self.second.clone(),
            _mid: PhantomData,
        }
    }
}

/// Compose two transducers. Input flows through `first`, then `second`.
pub fn comp<In, Mid, Out, X1, X2>(first: X1, second: X2) -> Comp<X1, X2, Mid>
where
    X1: Transducer<In, Mid>,
    X2: Transducer<Mid, Out>,
{
    Comp {
        first,
        second,
        _mid: PhantomData,
    }
}

/// Method-style composition: `map(f).comp(filter(p))`.
pub trait TransducerExt<In, Mid>: Transducer<In, Mid> + Sized {
    fn comp<Out, X: Transducer<Mid, Out>>(self, next: X) -> Comp<Self, X, Mid> {
        Comp {
            first: self,
            second: next,
            _mid: PhantomData,
        }
    }
}

impl<In, Mid, X: Transducer<In, Mid>> TransducerExt<In, Mid> for X {}
