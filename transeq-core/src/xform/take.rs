// transeq-core - Prefix and suffix transducers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::marker::PhantomData;
use std::sync::Arc;

use super::{Pred, Transducer};
use crate::error::Result;
use crate::reducer::{BoxReducer, Reducer, Reduction};

// ============================================================================
// take / take_nth
// ============================================================================

/// The first `n` elements.
pub struct Take<T> {
    n: usize,
    _elem: PhantomData<fn(T) -> T>,
}

impl<T> Clone for Take<T> {
    fn clone(&self) -> Self {
        take(self.n)
    }
}

pub fn take<T>(n: usize) -> Take<T> {
    Take {
        n,
        _elem: PhantomData,
    }
}

struct TakeStep<R> {
    rf: R,
    remaining: usize,
}

impl<A, T, R: Reducer<A, T>> Reducer<A, T> for TakeStep<R> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if self.remaining == 0 {
            return Ok(Reduction::Reduced(acc));
        }
        self.remaining -= 1;
        let result = self.rf.step(acc, item)?;
        if self.remaining == 0 {
            Ok(result.ensure_reduced())
        } else {
            Ok(result)
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: 'static> Transducer<T, T> for Take<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(TakeStep {
            rf,
            remaining: self.n,
        })
    }
}

/// Every `n`th element, starting with the `n`th: positions `n-1`, `2n-1`, ...
pub struct TakeNth<T> {
    n: usize,
    _elem: PhantomData<fn(T) -> T>,
}

impl<T> Clone for TakeNth<T> {
    fn clone(&self) -> Self {
        take_nth(self.n)
    }
}

/// `take_nth(0)` emits nothing.
pub fn take_nth<T>(n: usize) -> TakeNth<T> {
    TakeNth {
        n,
        _elem: PhantomData,
    }
}

struct TakeNthStep<R> {
    rf: R,
    n: usize,
    seen: usize,
}

impl<A, T, R: Reducer<A, T>> Reducer<A, T> for TakeNthStep<R> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if self.n == 0 {
            return Ok(Reduction::Reduced(acc));
        }
        self.seen += 1;
        if self.seen == self.n {
            self.seen = 0;
            self.rf.step(acc, item)
        } else {
            Ok(Reduction::Continue(acc))
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: 'static> Transducer<T, T> for TakeNth<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(TakeNthStep {
            rf,
            n: self.n,
            seen: 0,
        })
    }
}

// ============================================================================
// take_while
// ============================================================================

/// The longest prefix whose elements satisfy `pred`.
pub struct TakeWhile<T> {
    pred: Pred<T>,
}

impl<T> Clone for TakeWhile<T> {
    fn clone(&self) -> Self {
        TakeWhile {
            pred: Arc::clone(&self.pred),
        }
    }
}

pub fn take_while<T, P>(pred: P) -> TakeWhile<T>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    TakeWhile {
        pred: Arc::new(move |x| Ok(pred(x))),
    }
}

pub fn try_take_while<T, P>(pred: P) -> TakeWhile<T>
where
    P: Fn(&T) -> Result<bool> + Send + Sync + 'static,
{
    TakeWhile {
        pred: Arc::new(pred),
    }
}

struct TakeWhileStep<R, T> {
    rf: R,
    pred: Pred<T>,
}

impl<A, T, R: Reducer<A, T>> Reducer<A, T> for TakeWhileStep<R, T> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if (self.pred)(&item)? {
            self.rf.step(acc, item)
        } else {
            Ok(Reduction::Reduced(acc))
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: 'static> Transducer<T, T> for TakeWhile<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(TakeWhileStep {
            rf,
            pred: Arc::clone(&self.pred),
        })
    }
}

// ============================================================================
// drop / drop_while
// ============================================================================

/// Everything after the first `n` elements.
pub struct DropN<T> {
    n: usize,
    _elem: PhantomData<fn(T) -> T>,
}

impl<T> Clone for DropN<T> {
    fn clone(&self) -> Self {
        drop(self.n)
    }
}

pub fn drop<T>(n: usize) -> DropN<T> {
    DropN {
        n,
        _elem: PhantomData,
    }
}

struct DropStep<R> {
    rf: R,
    remaining: usize,
}

impl<A, T, R: Reducer<A, T>> Reducer<A, T> for DropStep<R> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Ok(Reduction::Continue(acc))
        } else {
            self.rf.step(acc, item)
        }
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: 'static> Transducer<T, T> for DropN<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(DropStep {
            rf,
            remaining: self.n,
        })
    }
}

/// Everything from the first element that fails `pred` onwards.
pub struct DropWhile<T> {
    pred: Pred<T>,
}

impl<T> Clone for DropWhile<T> {
    fn clone(&self) -> Self {
        DropWhile {
            pred: Arc::clone(&self.pred),
        }
    }
}

pub fn drop_while<T, P>(pred: P) -> DropWhile<T>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    DropWhile {
        pred: Arc::new(move |x| Ok(pred(x))),
    }
}

pub fn try_drop_while<T, P>(pred: P) -> DropWhile<T>
where
    P: Fn(&T) -> Result<bool> + Send + Sync + 'static,
{
    DropWhile {
        pred: Arc::new(pred),
    }
}

struct DropWhileStep<R, T> {
    rf: R,
    pred: Pred<T>,
    dropping: bool,
}

impl<A, T, R: Reducer<A, T>> Reducer<A, T> for DropWhileStep<R, T> {
    fn init(&mut self) -> Result<A> {
        self.rf.init()
    }

    fn step(&mut self, acc: A, item: T) -> Result<Reduction<A>> {
        if self.dropping && (self.pred)(&item)? {
            return Ok(Reduction::Continue(acc));
        }
        self.dropping = false;
        self.rf.step(acc, item)
    }

    fn complete(&mut self, acc: A) -> Result<A> {
        self.rf.complete(acc)
    }
}

impl<T: 'static> Transducer<T, T> for DropWhile<T> {
    fn apply<A, R>(&self, rf: R) -> BoxReducer<A, T>
    where
        A: 'static,
        R: Reducer<A, T> + 'static,
    {
        Box::new(DropWhileStep {
            rf,
            pred: Arc::clone(&self.pred),
            dropping: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::completing;

    /// Feed `input` until the reducer stops; returns output and how many
    /// elements were consumed.
    fn run<X: Transducer<i64, i64>>(xf: &X, input: &[i64]) -> (Vec<i64>, usize) {
        let mut rf = xf.apply(completing(|mut acc: Vec<i64>, x: i64| {
            acc.push(x);
            acc
        }));
        let mut acc = Vec::new();
        let mut consumed = 0;
        for &x in input {
            consumed += 1;
            let r = rf.step(acc, x).unwrap();
            let stop = r.is_reduced();
            acc = r.unreduced();
            if stop {
                break;
            }
        }
        (rf.complete(acc).unwrap(), consumed)
    }

    #[test]
    fn test_take_stops_at_n() {
        assert_eq!(run(&take(2), &[1, 2, 3, 4]), (vec![1, 2], 2));
        assert_eq!(run(&take(5), &[1, 2]), (vec![1, 2], 2));
        assert_eq!(run(&take(0), &[1, 2]), (vec![], 1));
    }

    #[test]
    fn test_take_nth() {
        let input: Vec<i64> = (0..12).collect();
        assert_eq!(run(&take_nth(4), &input).0, vec![3, 7, 11]);
        assert_eq!(run(&take_nth(1), &[5, 6]).0, vec![5, 6]);
        assert_eq!(run(&take_nth(0), &[5, 6]).0, Vec::<i64>::new());
    }

    #[test]
    fn test_take_while() {
        let (out, consumed) = run(&take_while(|x: &i64| *x < 3), &[1, 2, 3, 1]);
        assert_eq!(out, vec![1, 2]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_drop_and_drop_while() {
        assert_eq!(run(&drop(2), &[1, 2, 3, 4]).0, vec![3, 4]);
        assert_eq!(run(&drop(9), &[1, 2]).0, Vec::<i64>::new());
        assert_eq!(run(&drop_while(|x: &i64| *x < 3), &[1, 2, 3, 1]).0, vec![3, 1]);
    }
}
